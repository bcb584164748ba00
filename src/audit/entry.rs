//! Audit log records
//!
//! Each record names what happened to which expense and keeps a full copy of
//! the expense, so a deleted expense can be read back from the log.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Expense, ExpenseId};

/// A change made to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was recorded (UTC)
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub expense_id: ExpenseId,
    /// The expense as it was added, or as it was just before deletion
    pub expense: Expense,
}

impl AuditEntry {
    fn record(operation: Operation, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: expense.id,
            expense: expense.clone(),
        }
    }

    /// Entry for an expense that was just added
    pub fn expense_added(expense: &Expense) -> Self {
        Self::record(Operation::Create, expense)
    }

    /// Entry for an expense that was just removed
    pub fn expense_deleted(expense: &Expense) -> Self {
        Self::record(Operation::Delete, expense)
    }

    /// e.g. `2024-03-05 10:00:00 CREATE #7 Taxi (Travel) 40.00`
    pub fn format_human_readable(&self) -> String {
        format!(
            "{} {} #{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.expense_id,
            self.expense.label(),
            self.expense.amount
        )
    }
}
