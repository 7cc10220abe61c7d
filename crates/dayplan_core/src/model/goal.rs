//! Daily goal domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a daily goal.
pub type GoalId = Uuid;

/// A small daily intention that can be checked off and bulk-cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoal {
    pub id: GoalId,
    pub title: String,
    /// Always initialized `false`; flipped only through the goal store.
    pub completed: bool,
    /// Epoch milliseconds.
    pub created_at: i64,
}
