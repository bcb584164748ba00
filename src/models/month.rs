//! Calendar month used to restrict summaries
//!
//! Months are matched by number only, so March 2023 and March 2024 both fall
//! in month 3.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// English month names indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A month number in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SummaryMonth(u32);

impl SummaryMonth {
    /// Create a month, returning `None` outside 1..=12
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    /// Parse a month number from user input
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse().ok().and_then(Self::new)
    }

    /// The month number (1-12)
    pub fn number(&self) -> u32 {
        self.0
    }

    /// The English month name
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// Check whether a date falls in this month of any year
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.0
    }
}

impl fmt::Display for SummaryMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(SummaryMonth::new(0).is_none());
        assert!(SummaryMonth::new(13).is_none());
        assert_eq!(SummaryMonth::new(1).unwrap().name(), "January");
        assert_eq!(SummaryMonth::new(12).unwrap().name(), "December");
    }

    #[test]
    fn test_parse() {
        assert_eq!(SummaryMonth::parse(" 3 ").unwrap().number(), 3);
        assert!(SummaryMonth::parse("March").is_none());
        assert!(SummaryMonth::parse("-3").is_none());
    }

    #[test]
    fn test_contains_ignores_year() {
        let march = SummaryMonth::new(3).unwrap();
        assert!(march.contains(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
        assert!(march.contains(NaiveDate::from_ymd_opt(2019, 3, 31).unwrap()));
        assert!(!march.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    }
}
