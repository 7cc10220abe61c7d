//! In-memory snapshot slots for tests and throwaway sessions.

use super::{SnapshotStorage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Slot map held entirely in memory.
///
/// Interior mutability keeps the trait surface `&self`; the app model is
/// single-context, so `RefCell` is sufficient.
#[derive(Debug, Default)]
pub struct MemorySnapshotStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemorySnapshotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw body currently held by a slot, mostly useful in assertions.
    pub fn slot_body(&self, slot: &str) -> Option<String> {
        self.slots.borrow().get(slot).cloned()
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, body: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(slot.to_string(), body.to_string());
        Ok(())
    }
}
