//! Display formatting for terminal output
//!
//! Formatting helpers return `String`s so command handlers decide where the
//! text goes (stdout for flag commands, the prompt writer in interactive mode).

pub mod expense;
pub mod summary;

pub use expense::{
    format_category_listing, format_expense_added, format_expense_table, EMPTY_LEDGER_MESSAGE,
};
pub use summary::format_summary;
