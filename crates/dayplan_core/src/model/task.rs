//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its three-step priority scale.
//! - Keep priority rank/color mappings in one place for every view.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Priority ordering is fixed: high before medium before low.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Urgency scale used for ordering and color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Numeric ordering key. Lower rank sorts first, so high urgency leads.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Display color token for this priority.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::High => "#EF4444",
            Self::Medium => "#F59E0B",
            Self::Low => "#10B981",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single actionable item.
///
/// Snapshot blobs keep the camelCase field names written by earlier
/// versions of the app, so existing slots rehydrate unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    /// Epoch milliseconds. Assigned once; backdating happens at creation only.
    pub created_at: i64,
}

impl Task {
    /// Merges every present patch field into this task.
    ///
    /// Absent fields are left untouched. `id` and `created_at` are not
    /// patchable.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

/// Creation input for [`crate::TaskStore::add_task`].
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    /// Overrides creation time, e.g. when adding from a selected calendar day.
    pub created_at: Option<i64>,
}

/// Field-wise partial update. `None` means "leave as is".
///
/// A present `description` replaces the old one; clearing a description is
/// not expressible through a patch.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}
