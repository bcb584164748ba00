//! Expense service
//!
//! Business logic over an `ExpenseStore`. Every operation is one
//! load → compute → save cycle; nothing is cached between calls.

use std::path::Path;

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::CategoryMatch;
use crate::error::{SpendrError, SpendrResult};
use crate::export::export_expenses_csv_file;
use crate::models::{Expense, ExpenseId, Ledger, Money, MoneyParseError, SummaryMonth};
use crate::storage::ExpenseStore;

use super::summary::{Summary, SummaryQuery};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub category: String,
    pub amount: Money,
    /// Defaults to today's local date
    pub date: Option<NaiveDate>,
}

/// Service for expense management
pub struct ExpenseService<'a, S: ExpenseStore> {
    store: &'a S,
    audit: Option<&'a AuditLogger>,
}

impl<'a, S: ExpenseStore> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self { store, audit: None }
    }

    /// Record creates and deletes in an audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Load the current ledger
    pub fn load(&self) -> SpendrResult<Ledger> {
        self.store.load()
    }

    /// Record a new expense and persist the ledger
    pub fn create(&self, input: CreateExpenseInput) -> SpendrResult<Expense> {
        if input.amount.is_negative() {
            return Err(SpendrError::Validation(format!(
                "Amount cannot be negative: {}",
                input.amount
            )));
        }

        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut ledger = self.store.load()?;
        let expense = ledger.add(input.description, input.category, input.amount, date);
        self.store.save(&ledger)?;

        if let Some(audit) = self.audit {
            audit.log(&AuditEntry::expense_added(&expense))?;
        }

        Ok(expense)
    }

    /// Delete an expense by ID
    ///
    /// Returns `Ok(None)` without touching storage when no expense has that ID.
    pub fn delete(&self, id: ExpenseId) -> SpendrResult<Option<Expense>> {
        let mut ledger = self.store.load()?;

        let Some(removed) = ledger.remove(id) else {
            return Ok(None);
        };

        self.store.save(&ledger)?;

        if let Some(audit) = self.audit {
            audit.log(&AuditEntry::expense_deleted(&removed))?;
        }

        Ok(Some(removed))
    }

    /// All expenses in insertion order
    pub fn list(&self) -> SpendrResult<Vec<Expense>> {
        Ok(self.store.load()?.into_vec())
    }

    /// Expenses in the given category
    pub fn filter_by_category(
        &self,
        category: &str,
        mode: CategoryMatch,
    ) -> SpendrResult<Vec<Expense>> {
        let ledger = self.store.load()?;
        Ok(ledger
            .filter_by_category(category, mode)
            .cloned()
            .collect())
    }

    /// Total the ledger, optionally for one month and against a budget
    pub fn summarize(&self, query: SummaryQuery) -> SpendrResult<Summary> {
        let ledger = self.store.load()?;
        Summary::compute(&ledger, query)
    }

    /// Write the whole ledger to a CSV file, returning the row count
    pub fn export_csv(&self, path: &Path) -> SpendrResult<usize> {
        let ledger = self.store.load()?;
        export_expenses_csv_file(ledger.as_slice(), path)
    }
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> SpendrResult<Money> {
    Money::parse(input).map_err(|e| {
        let hint = match e {
            MoneyParseError::InvalidFormat(_) => {
                "Use a number like '250' or '12.50'".to_string()
            }
            MoneyParseError::TooPrecise(_) => "Use at most two decimal places".to_string(),
            MoneyParseError::OutOfRange(_) => format!("The largest amount is {}", Money::MAX),
        };
        SpendrError::Validation(format!("Invalid amount: '{}'. {}", input.trim(), hint))
    })
}

/// Parse an expense ID typed by the user
pub fn parse_id(input: &str) -> SpendrResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| SpendrError::Validation(format!("Invalid expense ID: '{}'", input.trim())))
}

/// Parse a month number (1-12) typed by the user
pub fn parse_month(input: &str) -> SpendrResult<SummaryMonth> {
    SummaryMonth::parse(input).ok_or_else(|| {
        SpendrError::Validation(format!(
            "Invalid month: '{}'. Use a number from 1 to 12",
            input.trim()
        ))
    })
}

/// Parse a YYYY-MM-DD date typed by the user
pub fn parse_date(input: &str) -> SpendrResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        SpendrError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input.trim()
        ))
    })
}
