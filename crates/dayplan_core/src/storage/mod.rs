//! Snapshot-slot persistence boundary.
//!
//! # Responsibility
//! - Define the slot contract the stores persist through.
//! - Name the stable slot keys, one per store.
//!
//! # Invariants
//! - A write replaces the entire slot body; there is no append path.
//! - Slot keys are stable across releases so old sessions rehydrate.

mod memory;
mod sqlite;

pub use memory::MemorySnapshotStorage;
pub use sqlite::SqliteSnapshotStorage;

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot holding the task collection.
pub const TASKS_SLOT: &str = "task-storage";
/// Slot holding the daily goal collection.
pub const GOALS_SLOT: &str = "goal-storage";
/// Slot holding the back-of-mind note collection.
pub const NOTES_SLOT: &str = "backofmind-storage";
/// Slot holding the singleton settings record.
pub const SETTINGS_SLOT: &str = "settings-storage";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Connection was handed over without migrations applied.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    /// Backend cannot accept reads or writes right now (quota, teardown).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} predates required {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable slot access used by every store.
///
/// Implementations are full-snapshot: `write_slot` replaces whatever body
/// the slot held before.
pub trait SnapshotStorage {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>>;
    fn write_slot(&self, slot: &str, body: &str) -> StorageResult<()>;
}

// Lets several stores share one backing storage by reference.
impl<S: SnapshotStorage + ?Sized> SnapshotStorage for &S {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>> {
        (**self).read_slot(slot)
    }

    fn write_slot(&self, slot: &str, body: &str) -> StorageResult<()> {
        (**self).write_slot(slot, body)
    }
}
