//! Service layer for spendr
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation, audit logging, and summaries.

pub mod expense;
pub mod summary;

pub use expense::{
    parse_amount, parse_date, parse_id, parse_month, CreateExpenseInput, ExpenseService,
};
pub use summary::{Summary, SummaryQuery};
