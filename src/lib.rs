//! spendr - simple expense tracker for the command line
//!
//! This library provides the core of the `spendr` expense tracker: a ledger of
//! expenses kept in a local JSON file that can be added to, deleted from,
//! listed, filtered by category, summarized by month against a budget, and
//! exported to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense, ledger, money, and month types
//! - `storage`: The `ExpenseStore` trait with JSON file and in-memory backends
//! - `services`: Business logic (create, delete, query, summarize, export)
//! - `audit`: Append-only audit log of changes
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and interactive mode
//!
//! # Example
//!
//! ```rust
//! use spendr::models::Money;
//! use spendr::services::{CreateExpenseInput, ExpenseService, SummaryQuery};
//! use spendr::storage::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let service = ExpenseService::new(&store);
//!
//! service.create(CreateExpenseInput {
//!     description: "Lunch".into(),
//!     category: "Food".into(),
//!     amount: Money::parse("12.50").unwrap(),
//!     date: None,
//! }).unwrap();
//!
//! let summary = service.summarize(SummaryQuery::new()).unwrap();
//! assert_eq!(summary.total, Money::from_cents(1250));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendrError, SpendrResult};
