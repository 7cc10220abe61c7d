//! SQLite-backed snapshot slots.
//!
//! # Responsibility
//! - Persist slot bodies in the `snapshots` table as whole-blob upserts.
//! - Refuse to operate on a connection that skipped migrations.
//!
//! # Invariants
//! - `write_slot` is a single UPSERT; callers never see partial bodies.
//! - Construction validates schema presence instead of masking it later.

use super::{SnapshotStorage, StorageError, StorageResult};
use crate::db::migrations::latest_version;
use crate::model::now_epoch_ms;
use rusqlite::{params, Connection, OptionalExtension};

/// Snapshot slots stored in a migrated SQLite connection.
///
/// Borrows the connection so all four stores of a session can share one
/// database file. The connection stays single-context per the app model.
#[derive(Clone, Copy)]
pub struct SqliteSnapshotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStorage<'conn> {
    /// Wraps a migrated connection, validating the schema it relies on.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` is behind the
    ///   latest migration this binary knows.
    /// - `MissingRequiredTable` when the `snapshots` table is absent.
    pub fn try_new(conn: &'conn Connection) -> StorageResult<Self> {
        let expected = latest_version();
        let actual: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual < expected {
            return Err(StorageError::UninitializedConnection {
                expected_version: expected,
                actual_version: actual,
            });
        }

        if !table_exists(conn, "snapshots")? {
            return Err(StorageError::MissingRequiredTable("snapshots"));
        }

        Ok(Self { conn })
    }
}

impl SnapshotStorage for SqliteSnapshotStorage<'_> {
    fn read_slot(&self, slot: &str) -> StorageResult<Option<String>> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM snapshots WHERE slot = ?1;",
                [slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    fn write_slot(&self, slot: &str, body: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (slot, body, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![slot, body, now_epoch_ms()],
        )?;
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> StorageResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
