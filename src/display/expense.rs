//! Expense display formatting
//!
//! Fixed-width table for `list` and the per-category listing for `filter`.
//! Columns are left-justified and never truncated; long values push the rest
//! of the row to the right.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::models::Expense;

pub const ID_WIDTH: usize = 5;
pub const DATE_WIDTH: usize = 12;
pub const DESCRIPTION_WIDTH: usize = 25;
pub const AMOUNT_WIDTH: usize = 10;
pub const CATEGORY_WIDTH: usize = 20;

/// Message shown when the ledger has no expenses at all
pub const EMPTY_LEDGER_MESSAGE: &str = "No expenses recorded yet.";

fn format_columns(id: &str, date: &str, description: &str, amount: &str, category: &str) -> String {
    format!(
        "{:<id_w$} {:<date_w$} {:<desc_w$} {:<amount_w$} {:<cat_w$}",
        id,
        date,
        description,
        amount,
        category,
        id_w = ID_WIDTH,
        date_w = DATE_WIDTH,
        desc_w = DESCRIPTION_WIDTH,
        amount_w = AMOUNT_WIDTH,
        cat_w = CATEGORY_WIDTH,
    )
}

/// Header row of the expense table
pub fn format_expense_header() -> String {
    format_columns("ID", "Date", "Description", "Amount", "Category")
}

/// Render a date, falling back to ISO 8601 when the pattern cannot render it
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut text = String::new();
    match write!(text, "{}", date.format(date_format)) {
        Ok(()) => text,
        Err(_) => date.to_string(),
    }
}

/// A single expense as a table row
pub fn format_expense_row(expense: &Expense, date_format: &str) -> String {
    format_columns(
        &expense.id.to_string(),
        &format_date(expense.date, date_format),
        &expense.description,
        &expense.amount.to_string(),
        &expense.category,
    )
}

/// Format all expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], date_format: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_LEDGER_MESSAGE);
    }

    let mut output = String::new();
    output.push_str(&format_expense_header());
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, date_format));
        output.push('\n');
    }

    output
}

/// Format the expenses matching a category query
pub fn format_category_listing(category: &str, matches: &[Expense], currency_symbol: &str) -> String {
    if matches.is_empty() {
        return format!("No expenses found in the category '{}'.\n", category);
    }

    let mut output = format!("Expenses in the category '{}':\n", category);
    for expense in matches {
        output.push_str(&format!(
            "  #{} {}: {} on {}\n",
            expense.id,
            expense.description,
            expense.amount.format_with_symbol(currency_symbol),
            expense.date.format("%Y-%m-%d")
        ));
    }
    output
}

/// Confirmation printed after an expense is added
pub fn format_expense_added(expense: &Expense) -> String {
    format!("Expense added successfully (ID: {})", expense.id)
}
