//! In-memory expense store
//!
//! Holds the persisted ledger in memory instead of on disk. Used by tests and
//! by callers embedding the ledger without a file.

use std::sync::RwLock;

use crate::error::SpendrError;
use crate::models::{Expense, Ledger};

use super::ExpenseStore;

/// Expense store backed by memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Vec<Expense>>,
    saves: RwLock<usize>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with expenses
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            data: RwLock::new(expenses),
            saves: RwLock::new(0),
        }
    }

    /// Number of times `save` has been called
    pub fn save_count(&self) -> Result<usize, SpendrError> {
        let saves = self.saves.read().map_err(|e| {
            SpendrError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(*saves)
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> Result<Ledger, SpendrError> {
        let data = self.data.read().map_err(|e| {
            SpendrError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(Ledger::from(data.clone()))
    }

    fn save(&self, ledger: &Ledger) -> Result<(), SpendrError> {
        let mut data = self.data.write().map_err(|e| {
            SpendrError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut saves = self.saves.write().map_err(|e| {
            SpendrError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *data = ledger.as_slice().to_vec();
        *saves += 1;
        Ok(())
    }
}
