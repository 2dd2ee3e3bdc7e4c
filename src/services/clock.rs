//! Time source abstraction
//!
//! Business logic never reads the wall clock directly; the session asks its
//! `Clock` for the current month so tests can pin it.

use chrono::{Local, NaiveDate};

use crate::models::Month;

/// Clock abstracts access to today's date so services remain deterministic in tests.
pub trait Clock {
    /// Returns today's local date.
    fn today(&self) -> NaiveDate;

    /// Returns the current month. Defaults to the month of `today()`.
    fn current_month(&self) -> Month {
        Month::of(&self.today())
    }
}

/// Real-time clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// A clock pinned to the first day of `month` in an arbitrary year
    pub fn in_month(month: Month) -> Self {
        // Day 1 exists in every month, so this cannot fail
        let date = NaiveDate::from_ymd_opt(2024, month.number(), 1).unwrap_or_default();
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(clock.current_month(), Month::APRIL);
        assert_eq!(FixedClock::in_month(Month::DECEMBER).current_month(), Month::DECEMBER);
    }

    #[test]
    fn test_system_clock_month_is_valid() {
        let month = SystemClock.current_month();
        assert!((1..=12).contains(&month.number()));
    }
}
