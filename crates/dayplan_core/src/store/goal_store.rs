//! Daily goal store.
//!
//! # Responsibility
//! - Own the goal collection: add, toggle, delete, clear-completed.
//! - Keep the `goal-storage` slot in sync after every mutation.
//!
//! # Invariants
//! - `completed` always initializes `false` and flips only via toggle.
//! - `clear_completed` is one atomic collection update and one slot write.

use super::{load_slot, persist_slot, ChangeNotifier, StoreResult, SubscriberId};
use crate::model::goal::{DailyGoal, GoalId};
use crate::model::now_epoch_ms;
use crate::storage::{SnapshotStorage, GOALS_SLOT};
use log::info;
use uuid::Uuid;

pub struct GoalStore<S: SnapshotStorage> {
    goals: Vec<DailyGoal>,
    storage: S,
    notifier: ChangeNotifier,
}

impl<S: SnapshotStorage> GoalStore<S> {
    /// Rehydrates the store from its slot, or starts empty on first run.
    pub fn load(storage: S) -> StoreResult<Self> {
        let goals: Vec<DailyGoal> = load_slot(&storage, GOALS_SLOT)?.unwrap_or_default();
        info!(
            "event=store_load module=goal_store status=ok slot={GOALS_SLOT} items={}",
            goals.len()
        );
        Ok(Self {
            goals,
            storage,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Current collection in insertion order.
    pub fn goals(&self) -> &[DailyGoal] {
        &self.goals
    }

    /// Appends a new, uncompleted goal and persists the collection.
    pub fn add_goal(&mut self, title: impl Into<String>, created_at: Option<i64>) -> GoalId {
        let goal = DailyGoal {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            created_at: created_at.unwrap_or_else(now_epoch_ms),
        };
        let id = goal.id;
        self.goals.push(goal);
        self.commit();
        id
    }

    /// Flips `completed` on the matching goal.
    ///
    /// Toggling twice restores the original state. Returns `false` when the
    /// id is absent.
    pub fn toggle_goal(&mut self, id: GoalId) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return false;
        };
        goal.completed = !goal.completed;
        self.commit();
        true
    }

    /// Removes the matching goal. Returns `false` when the id is absent.
    pub fn delete_goal(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        if self.goals.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Removes every completed goal in one update and one slot write.
    ///
    /// Returns how many goals were removed; zero means nothing was written.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.goals.len();
        self.goals.retain(|goal| !goal.completed);
        let removed = before - self.goals.len();
        if removed > 0 {
            self.commit();
        }
        removed
    }

    /// Registers a change callback fired after every successful mutation.
    pub fn subscribe(&mut self, listener: Box<dyn Fn()>) -> SubscriberId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn commit(&self) {
        persist_slot(&self.storage, GOALS_SLOT, &self.goals);
        self.notifier.emit();
    }
}
