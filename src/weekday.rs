//! Day-of-week resolution and the day filter.
//!
//! The UI exposes a seven-segment day picker. Its selected index (0 = Sunday, 6 = Saturday,
//! matching [`DAY_LABELS`]) is turned into a concrete date by [`resolve_day`], and tasks are
//! matched against that date by calendar day only ([`same_day`], [`filter_by_day`]).

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::task::Task;

/// The labels of the day picker, in index order
pub const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Resolve a day-of-week index to a concrete date: the next occurrence of that weekday,
/// rolling forward from `now`. When `now` already falls on the requested weekday, `now`
/// itself is returned. The time-of-day of `now` is carried over unchanged.
///
/// Index `i` selects the weekday numbered `i + 1` in Sunday-first numbering, which is the
/// weekday whose `num_days_from_sunday()` is `i`.
///
/// Falls back to `now` in case the date arithmetic fails (e.g. at the edge of the
/// representable time range).
pub fn resolve_day(day_index: u8, now: DateTime<Utc>) -> DateTime<Utc> {
    let target = u32::from(day_index % 7);
    let today = now.weekday().num_days_from_sunday();
    let days_ahead = (target + 7 - today) % 7;
    now.checked_add_signed(Duration::days(i64::from(days_ahead)))
        .unwrap_or(now)
}

/// Whether two moments fall on the same calendar day (year, month and day equal,
/// time-of-day ignored). Both sides are compared in Utc, the same calendar
/// [`resolve_day`] resolves into.
pub fn same_day(lhs: &DateTime<Utc>, rhs: &DateTime<Utc>) -> bool {
    lhs.date_naive() == rhs.date_naive()
}

/// Keep the tasks due on the day selected by `day_index`, resolved relative to `now`.
///
/// This is a date-only filter: completed tasks are not excluded here, hiding them (or not)
/// is up to the rendering layer. The input order is preserved.
pub fn filter_by_day<'t>(tasks: &'t [Task], day_index: u8, now: DateTime<Utc>) -> Vec<&'t Task> {
    let target_date = resolve_day(day_index, now);
    tasks.iter()
        .filter(|task| same_day(task.due_date(), &target_date))
        .collect()
}

/// The day index `now` falls on (e.g. 0 for a Sunday)
pub fn day_index_of(moment: &DateTime<Utc>) -> u8 {
    moment.weekday().num_days_from_sunday() as u8
}
