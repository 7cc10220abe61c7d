//! Domain records for the planning core.
//!
//! # Responsibility
//! - Define the canonical task/goal/note/settings shapes.
//! - Provide creation and partial-update inputs used by the stores.
//!
//! # Invariants
//! - Every collection record carries a stable, never-reused `Uuid` id.
//! - `created_at` fields are epoch milliseconds, assigned once at creation.

pub mod goal;
pub mod note;
pub mod settings;
pub mod task;

use chrono::Utc;

/// Current wall-clock time in epoch milliseconds.
///
/// Default value for `created_at` whenever the caller does not backdate.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
