//! Owning state containers for each entity collection.
//!
//! # Responsibility
//! - Hold the in-memory collections and their mutation operations.
//! - Bind every store to a snapshot slot: rehydrate on load, rewrite the
//!   whole slot after each mutation.
//!
//! # Invariants
//! - Stores are explicit values, never ambient globals; callers construct
//!   them over a [`SnapshotStorage`] and pass them where needed.
//! - A failed slot write is logged and swallowed: in-memory state stays the
//!   operative truth for the running session.
//! - Corrupt persisted blobs are rejected at load, not silently replaced.

pub mod goal_store;
pub mod note_store;
pub mod notify;
pub mod settings_store;
pub mod task_store;

pub use notify::{ChangeNotifier, SubscriberId};

use crate::storage::{SnapshotStorage, StorageError};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    /// Slot body exists but does not decode as the expected shape.
    Snapshot {
        slot: &'static str,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Snapshot { slot, source } => {
                write!(f, "corrupt snapshot in slot `{slot}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Snapshot { source, .. } => Some(source),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Reads and decodes one slot during rehydration.
///
/// Absent slot means first run and maps to `None`; the caller substitutes
/// its empty/default state.
fn load_slot<S, T>(storage: &S, slot: &'static str) -> StoreResult<Option<T>>
where
    S: SnapshotStorage,
    T: DeserializeOwned,
{
    let Some(body) = storage.read_slot(slot)? else {
        debug!("event=store_load module=store status=ok slot={slot} outcome=first_run");
        return Ok(None);
    };

    match serde_json::from_str(&body) {
        Ok(value) => Ok(Some(value)),
        Err(source) => Err(StoreError::Snapshot { slot, source }),
    }
}

/// Rewrites one slot with the full current state.
///
/// Fire-and-forget: encode or write failures are logged and the mutation
/// that triggered the write stands.
fn persist_slot<S, T>(storage: &S, slot: &'static str, state: &T)
where
    S: SnapshotStorage,
    T: Serialize + ?Sized,
{
    let body = match serde_json::to_string(state) {
        Ok(body) => body,
        Err(err) => {
            error!(
                "event=snapshot_write module=store status=error slot={slot} error_code=encode_failed error={err}"
            );
            return;
        }
    };

    if let Err(err) = storage.write_slot(slot, &body) {
        error!(
            "event=snapshot_write module=store status=error slot={slot} error_code=write_failed error={err}"
        );
    }
}
