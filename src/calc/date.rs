//! Date arithmetic: spans between dates and day offsets

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

/// Days in a calendar-agnostic year and month
const DAYS_PER_YEAR: i64 = 365;
const DAYS_PER_MONTH: i64 = 30;

/// Distance between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSpan {
    pub total_days: i64,
    /// Approximate breakdown using 365-day years and 30-day months
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Absolute distance between `start` and `end`, in either order
pub fn duration(start: NaiveDate, end: NaiveDate) -> DateSpan {
    let total_days = (end - start).num_days().abs();
    let remainder = total_days % DAYS_PER_YEAR;

    DateSpan {
        total_days,
        years: total_days / DAYS_PER_YEAR,
        months: remainder / DAYS_PER_MONTH,
        days: remainder % DAYS_PER_MONTH,
    }
}

/// `date` moved by `days` (negative moves backwards); `None` on overflow
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_duration_across_leap_year() {
        let span = duration(ymd(2024, 1, 1), ymd(2025, 1, 1));
        assert_eq!(
            span,
            DateSpan {
                total_days: 366,
                years: 1,
                months: 0,
                days: 1
            }
        );
    }

    #[test]
    fn test_duration_is_symmetric() {
        assert_eq!(
            duration(ymd(2024, 3, 15), ymd(2024, 1, 1)),
            duration(ymd(2024, 1, 1), ymd(2024, 3, 15))
        );
        let span = duration(ymd(2024, 1, 1), ymd(2024, 3, 15));
        assert_eq!(span.total_days, 74);
        assert_eq!((span.years, span.months, span.days), (0, 2, 14));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(ymd(2024, 2, 28), 1), Some(ymd(2024, 2, 29)));
        assert_eq!(add_days(ymd(2024, 3, 1), -1), Some(ymd(2024, 2, 29)));
        assert_eq!(add_days(ymd(2024, 1, 1), 0), Some(ymd(2024, 1, 1)));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(ymd(2024, 1, 1), i64::MAX), None);
    }
}
