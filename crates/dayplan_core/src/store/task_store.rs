//! Task store.
//!
//! # Responsibility
//! - Own the task collection and its add/update/delete/lookup operations.
//! - Keep the `task-storage` slot in sync after every mutation.
//!
//! # Invariants
//! - Ids are generated here and never reused within the collection.
//! - Insertion order is preserved; display ordering belongs to the views.
//! - Titles are stored as given; empty-input rejection is the form layer's
//!   contract, not this store's.

use super::{load_slot, persist_slot, ChangeNotifier, StoreResult, SubscriberId};
use crate::model::now_epoch_ms;
use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::storage::{SnapshotStorage, TASKS_SLOT};
use log::info;
use uuid::Uuid;

#[derive(Debug)]
pub struct TaskStore<S: SnapshotStorage> {
    tasks: Vec<Task>,
    storage: S,
    notifier: ChangeNotifier,
}

impl<S: SnapshotStorage> TaskStore<S> {
    /// Rehydrates the store from its slot, or starts empty on first run.
    ///
    /// # Errors
    /// - Storage read failures and corrupt blobs are surfaced; defaults are
    ///   never substituted for unreadable persisted state.
    pub fn load(storage: S) -> StoreResult<Self> {
        let tasks: Vec<Task> = load_slot(&storage, TASKS_SLOT)?.unwrap_or_default();
        info!(
            "event=store_load module=task_store status=ok slot={TASKS_SLOT} items={}",
            tasks.len()
        );
        Ok(Self {
            tasks,
            storage,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Current collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Point lookup by id.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new task and persists the collection.
    ///
    /// `created_at` defaults to now; callers backdate it when adding from a
    /// selected calendar day.
    pub fn add_task(&mut self, input: NewTask) -> TaskId {
        let task = Task {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            priority: input.priority,
            created_at: input.created_at.unwrap_or_else(now_epoch_ms),
        };
        let id = task.id;
        self.tasks.push(task);
        self.commit();
        id
    }

    /// Merges patch fields into the matching task.
    ///
    /// Returns `false` when the id is absent; nothing is written then.
    pub fn update_task(&mut self, id: TaskId, patch: &TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.apply_patch(patch);
        self.commit();
        true
    }

    /// Removes the matching task. Returns `false` when the id is absent.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Registers a change callback fired after every successful mutation.
    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriberId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn commit(&self) {
        persist_slot(&self.storage, TASKS_SLOT, &self.tasks);
        self.notifier.emit();
    }
}
