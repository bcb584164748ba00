//! Expense model
//!
//! A single recorded expense. Field names match the on-disk JSON objects and
//! the CSV export header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the ledger
    pub id: ExpenseId,

    /// Free-text description
    pub description: String,

    /// Free-text category
    pub category: String,

    /// Amount spent (never negative for expenses created through the service)
    pub amount: Money,

    /// Date the expense was incurred
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Label used in audit entries and confirmations
    pub fn label(&self) -> String {
        format!("{} ({})", self.description, self.category)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_json_field_names() {
        let expense = Expense::new(
            ExpenseId::new(1),
            "Lunch",
            "Food",
            Money::from_cents(1250),
            date(2024, 3, 5),
        );

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["description"], "Lunch");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2024-03-05");
    }

    #[test]
    fn test_reads_hand_written_record() {
        let json = r#"{"id": 3, "description": "Taxi", "category": "Travel", "amount": 40, "date": "2024-04-01"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, ExpenseId::new(3));
        assert_eq!(expense.amount, Money::from_cents(4000));
        assert_eq!(expense.date, date(2024, 4, 1));
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(
            ExpenseId::new(1),
            "Lunch",
            "Food",
            Money::from_cents(1250),
            date(2024, 3, 5),
        );
        assert_eq!(expense.to_string(), "2024-03-05 Lunch 12.50 Food");
        assert_eq!(expense.label(), "Lunch (Food)");
    }
}
