//! Back-of-mind note store.
//!
//! # Responsibility
//! - Own the free-text note collection: add, remove, update-in-place.
//! - Keep the `backofmind-storage` slot in sync after every mutation.
//!
//! # Invariants
//! - Text is stored as given; trimming/non-empty checks are the caller's.
//! - Insertion order is preserved; recency-first display is a view concern.

use super::{load_slot, persist_slot, ChangeNotifier, StoreResult, SubscriberId};
use crate::model::note::{Note, NoteId};
use crate::model::now_epoch_ms;
use crate::storage::{SnapshotStorage, NOTES_SLOT};
use log::info;
use uuid::Uuid;

pub struct NoteStore<S: SnapshotStorage> {
    notes: Vec<Note>,
    storage: S,
    notifier: ChangeNotifier,
}

impl<S: SnapshotStorage> NoteStore<S> {
    /// Rehydrates the store from its slot, or starts empty on first run.
    pub fn load(storage: S) -> StoreResult<Self> {
        let notes: Vec<Note> = load_slot(&storage, NOTES_SLOT)?.unwrap_or_default();
        info!(
            "event=store_load module=note_store status=ok slot={NOTES_SLOT} items={}",
            notes.len()
        );
        Ok(Self {
            notes,
            storage,
            notifier: ChangeNotifier::new(),
        })
    }

    /// Current collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a new note and persists the collection.
    pub fn add_note(&mut self, text: impl Into<String>) -> NoteId {
        let note = Note {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: now_epoch_ms(),
        };
        let id = note.id;
        self.notes.push(note);
        self.commit();
        id
    }

    /// Removes the matching note. Returns `false` when the id is absent.
    pub fn remove_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return false;
        }
        self.commit();
        true
    }

    /// Replaces the text of the matching note in place.
    ///
    /// `id` and `created_at` are untouched. Returns `false` when the id is
    /// absent.
    pub fn update_note(&mut self, id: NoteId, text: impl Into<String>) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.text = text.into();
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
        persist_slot(&self.storage, NOTES_SLOT, &self.notes);
        self.notifier.emit();
    }
}
