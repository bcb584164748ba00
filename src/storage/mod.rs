//! Storage layer for spendr
//!
//! Provides the `ExpenseStore` abstraction over where the ledger lives, a JSON
//! file implementation with atomic writes, and an in-memory implementation.
//!
//! There is no file locking. Two processes saving the same ledger at once
//! race, and the last writer wins.

pub mod expenses;
pub mod file_io;
pub mod memory;

pub use expenses::JsonFileStore;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryStore;

use crate::error::SpendrError;
use crate::models::Ledger;

/// Backing storage for the ledger
///
/// A store is loaded in full at the start of a command and saved in full after
/// a mutation. Loading a store that has never been saved yields an empty ledger.
pub trait ExpenseStore {
    /// Load the whole ledger
    fn load(&self) -> Result<Ledger, SpendrError>;

    /// Replace the persisted ledger with `ledger`
    fn save(&self, ledger: &Ledger) -> Result<(), SpendrError>;
}
