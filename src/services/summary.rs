//! Expense totals
//!
//! Sums the ledger, optionally restricted to one calendar month, and compares
//! the result against an optional budget.

use crate::error::{SpendrError, SpendrResult};
use crate::models::{Ledger, Money, SummaryMonth};

/// What to summarize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryQuery {
    /// Restrict to expenses dated in this month (any year)
    pub month: Option<SummaryMonth>,
    /// Warn when the total exceeds this amount
    pub budget: Option<Money>,
}

impl SummaryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: SummaryMonth) -> Self {
        self.month = Some(month);
        self
    }

    pub fn budget(mut self, budget: Money) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// Result of summarizing the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Month the total is restricted to, if any
    pub month: Option<SummaryMonth>,
    /// Sum of the included amounts
    pub total: Money,
    /// Budget the total was compared against, if any
    pub budget: Option<Money>,
}

impl Summary {
    /// Summarize a ledger
    ///
    /// Fails only when the included amounts sum past the i64 cent range.
    pub fn compute(ledger: &Ledger, query: SummaryQuery) -> SpendrResult<Self> {
        let total = match query.month {
            Some(month) => Money::checked_sum(ledger.in_month(month).map(|e| e.amount)),
            None => ledger.total(),
        }
        .ok_or_else(|| {
            SpendrError::Validation("Total expenses are too large to add up".to_string())
        })?;

        Ok(Self {
            month: query.month,
            total,
            budget: query.budget,
        })
    }

    /// True when a budget was given and the total is strictly greater than it
    pub fn is_over_budget(&self) -> bool {
        self.budget.is_some_and(|budget| self.total > budget)
    }
}
