//! Calendar projection over task and goal snapshots.
//!
//! # Responsibility
//! - Bucket items by the local calendar day of their `created_at`.
//!
//! # Invariants
//! - Truncation uses local day boundaries, never UTC; an item created at
//!   23:59 local on day D must not surface under day D+1.
//! - Recomputed per query; nothing here is cached or stored.

use crate::model::goal::DailyGoal;
use crate::model::task::Task;
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeSet;

/// Items whose creation falls on one local calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAgenda {
    pub tasks: Vec<Task>,
    pub goals: Vec<DailyGoal>,
}

impl DayAgenda {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.goals.is_empty()
    }
}

/// Truncates an epoch-millisecond timestamp to its local calendar day.
///
/// Returns `None` only for timestamps outside chrono's representable range.
pub fn local_day(epoch_ms: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|moment| moment.date_naive())
}

/// Partitions tasks and goals into those created on the given local day.
pub fn agenda_for_day(tasks: &[Task], goals: &[DailyGoal], day: NaiveDate) -> DayAgenda {
    DayAgenda {
        tasks: tasks
            .iter()
            .filter(|task| local_day(task.created_at) == Some(day))
            .cloned()
            .collect(),
        goals: goals
            .iter()
            .filter(|goal| local_day(goal.created_at) == Some(day))
            .cloned()
            .collect(),
    }
}

/// Local days that carry at least one task or goal, in ascending order.
///
/// Month views use this to mark busy days without building every agenda.
pub fn days_with_items(tasks: &[Task], goals: &[DailyGoal]) -> BTreeSet<NaiveDate> {
    tasks
        .iter()
        .map(|task| task.created_at)
        .chain(goals.iter().map(|goal| goal.created_at))
        .filter_map(local_day)
        .collect()
}
