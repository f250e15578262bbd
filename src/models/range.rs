//! Date range model.
//!
//! # Time Model
//! Days are `chrono::NaiveDate` values with no time zone attached. The
//! caller decides which local calendar they belong to.
//!
//! A range is inclusive on both ends. An inverted range (end before
//! start) is not an error: it simply covers no days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, RosterError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| RosterError::InvalidDate(s.to_string()))
}

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, RosterError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Whether the range covers no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    /// Whether `day` falls inside the range.
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day in the range, in chronological order.
    pub fn days(&self) -> Vec<NaiveDate> {
        if self.is_empty() {
            return Vec::new();
        }
        self.start.iter_days().take(self.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_days() {
        let r = DateRange::parse("2024-02-27", "2024-03-01").unwrap();
        let days: Vec<String> = r.days().iter().map(|d| d.to_string()).collect();
        // 2024 is a leap year
        assert_eq!(
            days,
            vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]
        );
        assert_eq!(r.len(), 4);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_single_day_range() {
        let r = DateRange::parse("2024-01-01", "2024-01-01").unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.days().len(), 1);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = DateRange::parse("2024-01-03", "2024-01-01").unwrap();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.days().is_empty());
    }

    #[test]
    fn test_range_contains() {
        let r = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert!(r.contains(parse_date("2024-01-01").unwrap()));
        assert!(r.contains(parse_date("2024-01-31").unwrap()));
        assert!(!r.contains(parse_date("2024-02-01").unwrap()));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date(" 2024-02-03 ").is_ok());
    }
}
