//! Priority ordering and filtering over task snapshots.

use crate::model::task::{Priority, Task};

/// Returns the tasks ordered by priority rank, high urgency first.
///
/// The sort is stable: tasks sharing a priority keep their insertion
/// order relative to each other (`slice::sort_by_key` guarantees this,
/// and the property is pinned by test).
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(|task| task.priority.rank());
    ordered
}

/// Returns the tasks matching the selected priority; `None` selects all.
pub fn filter_by_priority(tasks: &[Task], selected: Option<Priority>) -> Vec<Task> {
    match selected {
        None => tasks.to_vec(),
        Some(priority) => tasks
            .iter()
            .filter(|task| task.priority == priority)
            .cloned()
            .collect(),
    }
}
