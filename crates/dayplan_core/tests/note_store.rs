use dayplan_core::{MemorySnapshotStorage, NoteStore};

#[test]
fn add_remove_and_length_stay_consistent() {
    let storage = MemorySnapshotStorage::new();
    let mut store = NoteStore::load(&storage).unwrap();

    let first = store.add_note("call the plumber");
    let second = store.add_note("gift idea: botanical atlas");
    assert_eq!(store.notes().len(), 2);

    assert!(store.remove_note(first));
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].id, second);
}

#[test]
fn update_replaces_text_in_place() {
    let storage = MemorySnapshotStorage::new();
    let mut store = NoteStore::load(&storage).unwrap();

    let id = store.add_note("draft thought");
    let created_at = store.notes()[0].created_at;

    assert!(store.update_note(id, "refined thought"));

    let note = &store.notes()[0];
    assert_eq!(note.text, "refined thought");
    assert_eq!(note.id, id);
    assert_eq!(note.created_at, created_at);
}

#[test]
fn remove_and_update_on_missing_ids_return_false() {
    let storage = MemorySnapshotStorage::new();
    let mut store = NoteStore::load(&storage).unwrap();
    store.add_note("keeper");

    let unknown = uuid::Uuid::new_v4();
    assert!(!store.remove_note(unknown));
    assert!(!store.update_note(unknown, "lost"));
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].text, "keeper");
}

#[test]
fn insertion_order_is_preserved() {
    // Recency-first display is a view concern; the store keeps add order.
    let storage = MemorySnapshotStorage::new();
    let mut store = NoteStore::load(&storage).unwrap();

    store.add_note("oldest");
    store.add_note("middle");
    store.add_note("newest");

    let texts: Vec<&str> = store.notes().iter().map(|note| note.text.as_str()).collect();
    assert_eq!(texts, ["oldest", "middle", "newest"]);
}

#[test]
fn rehydration_round_trip_preserves_collection_by_value() {
    let storage = MemorySnapshotStorage::new();

    let mut store = NoteStore::load(&storage).unwrap();
    store.add_note("remember this");
    store.add_note("and this");
    let before = store.notes().to_vec();
    drop(store);

    let reloaded = NoteStore::load(&storage).unwrap();
    assert_eq!(reloaded.notes(), before.as_slice());
}
