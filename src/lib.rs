//! This crate provides the core of a single-screen, day-filtered to-do list.
//!
//! Tasks are held in an in-memory [`TaskStore`]: users add named tasks with a due day of
//! the week, view them filtered by day, and delete them. The day-of-week arithmetic and the
//! "same calendar day" filter live in the [`weekday`] module.
//!
//! "Now" is never read implicitly: operations take a [`Clock`](clock::Clock), so production
//! code uses [`SystemClock`](clock::SystemClock) while tests pin time with a
//! [`FixedClock`](clock::FixedClock).
//!
//! The only asynchronous boundary is the optional, fire-and-forget insertion of a calendar
//! event into a platform calendar, behind the [`calendar`] module. Its outcome is logged and
//! never wired back into task state.

pub mod clock;

mod task;
pub use task::Task;
pub use task::TaskId;
mod store;
pub use store::TaskStore;
pub mod weekday;

pub mod calendar;
pub use calendar::CalendarLink;
pub mod mock_source;

pub mod config;
pub mod utils;
