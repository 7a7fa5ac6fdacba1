///! Some utility functions

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::store::TaskStore;
use crate::task::Task;
use crate::weekday::DAY_LABELS;

/// A debug utility that pretty-prints the tasks due on each day of the week
pub fn print_week(store: &TaskStore, clock: &dyn Clock) {
    for (index, label) in DAY_LABELS.iter().enumerate() {
        let due = store.filtered_tasks(index as u8, clock);
        println!("{} ({} tasks)", label, due.len());
        for task in due {
            print_task(task);
        }
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} {}\tdue {}\t{}", completion, task.name(), format_day(task.due_date()), task.id());
}

/// A long, human-readable date, suitable for a screen header
pub fn format_day(moment: &DateTime<Utc>) -> String {
    moment.format("%B %-d, %Y").to_string()
}

/// Dump the whole store as JSON. This is usually used for debugging
pub fn dump_json(store: &TaskStore) -> String {
    serde_json::to_string_pretty(store.tasks()).unwrap_or_else(|err| {
        log::warn!("Unable to serialize the task list: {}", err);
        String::from("[]")
    })
}
