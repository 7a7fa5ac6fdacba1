//! The in-memory task store

use crate::clock::Clock;
use crate::task::{Task, TaskId};
use crate::weekday;

/// The authoritative, insertion-ordered collection of tasks.
///
/// The store exclusively owns its tasks; callers only ever get shared references to them.
/// It has an owner-supplied lifecycle (created at process start, dropped at process end),
/// there is no hidden global instance.
///
/// All operations are synchronous and immediate. Faulty inputs (an empty name, an unknown
/// id) are silently ignored rather than reported, matching the UI this store backs.
#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new task named `name`, due on the day selected by `day_index` (resolved
    /// relative to the clock's "now", see [`weekday::resolve_day`]).
    ///
    /// An empty `name` is a no-op and returns `None`. The name is used as-is, it is not
    /// trimmed: a whitespace-only name is a valid task name.
    /// On success, returns a reference to the newly appended task. Clearing the input
    /// buffer after a successful add is the caller's concern.
    pub fn add_task(&mut self, name: &str, day_index: u8, clock: &dyn Clock) -> Option<&Task> {
        if name.is_empty() {
            return None;
        }

        let now = clock.now();
        let due_date = weekday::resolve_day(day_index, now);
        let task = Task::new(name.to_string(), due_date, now);
        log::debug!("Adding task {:?} due {}", task.name(), task.due_date());
        self.tasks.push(task);
        self.tasks.last()
    }

    /// Remove the task with the given id, keeping the relative order of the remaining tasks.
    /// Unknown ids are a no-op.
    pub fn delete_task(&mut self, id: &TaskId) {
        match self.tasks.iter().position(|task| task.id() == id) {
            Some(index) => {
                self.tasks.remove(index);
            },
            None => {
                log::debug!("Asked to delete unknown task {}, ignoring", id);
            },
        }
    }

    /// The current tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The tasks due on the day selected by `day_index`, in insertion order.
    /// See [`weekday::filter_by_day`].
    pub fn filtered_tasks(&self, day_index: u8, clock: &dyn Clock) -> Vec<&Task> {
        weekday::filter_by_day(&self.tasks, day_index, clock.now())
    }
}
