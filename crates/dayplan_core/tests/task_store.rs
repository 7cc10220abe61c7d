use dayplan_core::db::open_db_in_memory;
use dayplan_core::storage::{SnapshotStorage, StorageResult, TASKS_SLOT};
use dayplan_core::{
    MemorySnapshotStorage, NewTask, Priority, SqliteSnapshotStorage, StorageError, StoreError,
    TaskPatch, TaskStore,
};
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

fn new_task(title: &str, priority: Priority) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        priority,
        created_at: None,
    }
}

#[test]
fn add_assigns_unique_ids_and_length_tracks_adds_minus_deletes() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let ids: Vec<_> = (0..5)
        .map(|n| store.add_task(new_task(&format!("task {n}"), Priority::Medium)))
        .collect();

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), 5);

    assert!(store.delete_task(ids[0]));
    assert!(store.delete_task(ids[3]));
    assert_eq!(store.tasks().len(), 3);
}

#[test]
fn get_task_is_a_point_lookup() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let id = store.add_task(new_task("find me", Priority::Low));
    store.add_task(new_task("someone else", Priority::High));

    assert_eq!(store.get_task(id).unwrap().title, "find me");
    assert!(store.get_task(uuid::Uuid::new_v4()).is_none());
}

#[test]
fn update_patches_only_named_fields_of_that_task() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let target = store.add_task(NewTask {
        title: "write report".to_string(),
        description: Some("quarterly numbers".to_string()),
        priority: Priority::High,
        created_at: Some(1_700_000_000_000),
    });
    let bystander = store.add_task(new_task("untouched", Priority::Medium));

    assert!(store.update_task(
        target,
        &TaskPatch {
            priority: Some(Priority::Low),
            ..TaskPatch::default()
        },
    ));

    let updated = store.get_task(target).unwrap();
    assert_eq!(updated.priority, Priority::Low);
    assert_eq!(updated.title, "write report");
    assert_eq!(updated.description.as_deref(), Some("quarterly numbers"));
    assert_eq!(updated.created_at, 1_700_000_000_000);

    let other = store.get_task(bystander).unwrap();
    assert_eq!(other.title, "untouched");
    assert_eq!(other.priority, Priority::Medium);
}

#[test]
fn update_and_delete_on_missing_ids_return_false() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();
    store.add_task(new_task("only one", Priority::Medium));

    let unknown = uuid::Uuid::new_v4();
    assert!(!store.update_task(unknown, &TaskPatch::default()));
    assert!(!store.delete_task(unknown));
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn empty_title_is_stored_verbatim() {
    // Input validation is the form layer's contract; the store keeps what
    // it is given without panicking.
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let id = store.add_task(new_task("", Priority::Low));
    assert_eq!(store.get_task(id).unwrap().title, "");
}

#[test]
fn backdated_created_at_is_kept() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let id = store.add_task(NewTask {
        title: "added from calendar".to_string(),
        description: None,
        priority: Priority::Medium,
        created_at: Some(42),
    });

    assert_eq!(store.get_task(id).unwrap().created_at, 42);
}

#[test]
fn rehydration_round_trip_preserves_collection_by_value() {
    let storage = MemorySnapshotStorage::new();

    let mut store = TaskStore::load(&storage).unwrap();
    store.add_task(new_task("first", Priority::High));
    store.add_task(new_task("second", Priority::Low));
    let before = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::load(&storage).unwrap();
    assert_eq!(reloaded.tasks(), before.as_slice());
}

#[test]
fn rehydration_round_trip_through_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let storage = SqliteSnapshotStorage::try_new(&conn).unwrap();

    let mut store = TaskStore::load(storage).unwrap();
    store.add_task(new_task("persisted", Priority::High));
    let before = store.tasks().to_vec();
    drop(store);

    let reloaded = TaskStore::load(storage).unwrap();
    assert_eq!(reloaded.tasks(), before.as_slice());
}

#[test]
fn corrupt_snapshot_is_rejected_at_load() {
    let storage = MemorySnapshotStorage::new();
    storage.write_slot(TASKS_SLOT, "definitely not json").unwrap();

    let err = TaskStore::load(&storage).unwrap_err();
    assert!(matches!(err, StoreError::Snapshot { slot, .. } if slot == TASKS_SLOT));
}

#[test]
fn subscribers_fire_after_each_mutation_until_unsubscribed() {
    let storage = MemorySnapshotStorage::new();
    let mut store = TaskStore::load(&storage).unwrap();

    let hits = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&hits);
    let subscription = store.subscribe(Box::new(move || counter.set(counter.get() + 1)));

    let id = store.add_task(new_task("watched", Priority::Medium));
    store.update_task(
        id,
        &TaskPatch {
            title: Some("renamed".to_string()),
            ..TaskPatch::default()
        },
    );
    store.delete_task(id);
    assert_eq!(hits.get(), 3);

    // Missed lookups are not mutations and must stay silent.
    store.delete_task(id);
    assert_eq!(hits.get(), 3);

    assert!(store.unsubscribe(subscription));
    store.add_task(new_task("unwatched", Priority::Low));
    assert_eq!(hits.get(), 3);
}

struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn read_slot(&self, _slot: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn write_slot(&self, _slot: &str, _body: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

#[test]
fn failed_slot_write_keeps_in_memory_state() {
    let mut store = TaskStore::load(FailingStorage).unwrap();

    let id = store.add_task(new_task("still here", Priority::High));

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.get_task(id).unwrap().title, "still here");
}
