//! Time sources.
//!
//! Both the task store and the day filter depend on "now". Reading the ambient clock directly
//! would make their behavior time-dependent and hard to test, so the clock is an explicit
//! dependency instead: [`SystemClock`] in production, [`FixedClock`] in tests.

use chrono::{DateTime, Utc};

/// A source of "now"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real, ambient clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a given moment.
/// Useful in tests, where weekday arithmetic must be deterministic.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_pinned() {
        let moment = Utc.ymd(2023, 6, 14).and_hms(9, 30, 0);
        let clock = FixedClock(moment);
        assert_eq!(clock.now(), moment);
        assert_eq!(clock.now(), moment);
    }
}
