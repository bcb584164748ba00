//! Strongly-typed ID wrapper for expenses
//!
//! Expense IDs are small positive integers assigned sequentially by the
//! ledger. The newtype keeps them from being confused with counts or months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense, unique within a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The ID given to the first expense in an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an ID from a raw integer
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The ID that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next() {
        assert_eq!(ExpenseId::FIRST.next(), ExpenseId::new(2));
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!(" 7 ".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&ExpenseId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: ExpenseId = serde_json::from_str("3").unwrap();
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(ExpenseId::new(1) < ExpenseId::new(3));
        assert_eq!(
            [ExpenseId::new(1), ExpenseId::new(3)].iter().max(),
            Some(&ExpenseId::new(3))
        );
    }
}
