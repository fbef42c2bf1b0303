//! Inclusive calendar date range.

use std::fmt;

use chrono::NaiveDate;

/// Wire and input format for range bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, returning `None` when `start` is after `end`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns whether the day lies within the range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Start bound formatted for the backend.
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// End bound formatted for the backend.
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start_param(), self.end_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(DateRange::new(day(2024, 2, 1), day(2024, 1, 1)).is_none());
        assert!(DateRange::new(day(2024, 1, 1), day(2024, 1, 1)).is_some());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(day(2024, 1, 1), day(2024, 1, 31)).unwrap();
        assert!(range.contains(day(2024, 1, 1)));
        assert!(range.contains(day(2024, 1, 31)));
        assert!(!range.contains(day(2024, 2, 1)));
        assert_eq!(range.start_param(), "2024-01-01");
        assert_eq!(range.to_string(), "2024-01-01 .. 2024-01-31");
    }
}
