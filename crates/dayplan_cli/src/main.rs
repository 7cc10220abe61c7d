//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dayplan_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use dayplan_core::db::open_db_in_memory;
use dayplan_core::{
    sort_by_priority, GoalStore, NewTask, NoopApplySettings, Priority, SettingsStore,
    SqliteSnapshotStorage, TaskStore,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("dayplan_core ping={}", dayplan_core::ping());
    println!("dayplan_core version={}", dayplan_core::core_version());

    // An in-memory session exercises the full store wiring without touching
    // any on-disk state.
    let conn = open_db_in_memory()?;
    let storage = SqliteSnapshotStorage::try_new(&conn)?;

    let mut tasks = TaskStore::load(storage)?;
    tasks.add_task(NewTask {
        title: "triage inbox".to_string(),
        description: None,
        priority: Priority::Medium,
        created_at: None,
    });
    tasks.add_task(NewTask {
        title: "book dentist".to_string(),
        description: Some("ask about the evening slot".to_string()),
        priority: Priority::High,
        created_at: None,
    });

    for task in sort_by_priority(tasks.tasks()) {
        println!("task priority={} title={}", task.priority, task.title);
    }

    let mut goals = GoalStore::load(storage)?;
    let goal = goals.add_goal("stretch for ten minutes", None);
    goals.toggle_goal(goal);
    let completed = goals.goals().iter().filter(|goal| goal.completed).count();
    println!("goals total={} completed={completed}", goals.goals().len());

    let settings = SettingsStore::load(storage, Box::new(NoopApplySettings))?;
    println!(
        "settings font_size={} theme={:?}",
        settings.settings().base_font_size,
        settings.settings().theme
    );

    Ok(())
}
