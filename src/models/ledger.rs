//! In-memory ledger
//!
//! The ordered collection of expenses for one command invocation. Insertion
//! order is preserved and IDs are unique; all operations are linear scans.

use chrono::NaiveDate;

use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::SummaryMonth;
use crate::config::CategoryMatch;

/// Ordered sequence of expenses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// The ID the next added expense will receive
    ///
    /// `1` for an empty ledger, otherwise one past the largest existing ID.
    /// Gaps left by deletions are never reused below the maximum.
    pub fn next_id(&self) -> ExpenseId {
        self.expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ExpenseId::FIRST)
    }

    /// Append a new expense with a freshly assigned ID, returning a copy of it
    pub fn add(
        &mut self,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Expense {
        let expense = Expense::new(self.next_id(), description, category, amount, date);
        self.expenses.push(expense.clone());
        expense
    }

    /// Remove the expense with the given ID
    ///
    /// Returns the removed expense, or `None` (leaving the ledger untouched)
    /// when no expense has that ID.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Look up an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Expenses whose category matches the query
    pub fn filter_by_category<'a>(
        &'a self,
        category: &'a str,
        mode: CategoryMatch,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |e| mode.matches(&e.category, category))
    }

    /// Expenses dated in the given month of any year
    pub fn in_month(&self, month: SummaryMonth) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| month.contains(e.date))
    }

    /// Sum of all amounts, or `None` if it overflows
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.expenses.iter().map(|e| e.amount))
    }

    /// All expenses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn into_vec(self) -> Vec<Expense> {
        self.expenses
    }
}

impl From<Vec<Expense>> for Ledger {
    fn from(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}
