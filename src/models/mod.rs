//! Core data models for spendr
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its ID and amount types, the in-memory ledger, and
//! the month selector used by summaries.

pub mod expense;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::{SummaryMonth, MONTH_NAMES};
