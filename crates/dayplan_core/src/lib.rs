//! Core state layer for Dayplan, a personal planning app.
//! This crate owns the task/goal/note/settings stores, their snapshot
//! persistence, and the derived calendar/priority projections.

pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::{DailyGoal, GoalId};
pub use model::note::{Note, NoteId};
pub use model::settings::{Settings, SettingsUpdate, Theme, FONT_SIZE_MAX, FONT_SIZE_MIN};
pub use model::task::{NewTask, Priority, Task, TaskId, TaskPatch};
pub use storage::{
    MemorySnapshotStorage, SnapshotStorage, SqliteSnapshotStorage, StorageError, StorageResult,
};
pub use store::goal_store::GoalStore;
pub use store::note_store::NoteStore;
pub use store::settings_store::{ApplySettings, NoopApplySettings, SettingsStore};
pub use store::task_store::TaskStore;
pub use store::{ChangeNotifier, StoreError, StoreResult, SubscriberId};
pub use view::calendar::{agenda_for_day, days_with_items, local_day, DayAgenda};
pub use view::sort::{filter_by_priority, sort_by_priority};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
