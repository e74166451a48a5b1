//! Wall-clock source for time-dependent rules.
//!
//! # Responsibility
//! - Provide "now" to state mutations that stamp or derive dates.
//! - Allow tests to pin time so day-based rules stay deterministic.
//!
//! # Invariants
//! - All timestamps are local wall-clock values without zone offset.

use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Source of the current local date-time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Calendar day of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a caller-provided instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}

/// Midnight at the start of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Midnight at the start of the day after `day`.
///
/// Saturates at the last representable date instead of overflowing.
pub fn next_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day.checked_add_days(Days::new(1)).unwrap_or(day))
}

#[cfg(test)]
mod tests {
    use super::{next_day, Clock, FixedClock};
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_reports_pinned_day() {
        let now = NaiveDate::from_ymd_opt(2026, 7, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let clock = FixedClock::at(now);
        assert_eq!(clock.now(), now);
        assert_eq!(clock.today(), now.date());
    }

    #[test]
    fn next_day_rolls_over_month_end() {
        let day = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let next = next_day(day);
        assert_eq!(next.date(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(next.time(), chrono::NaiveTime::MIN);
    }
}
