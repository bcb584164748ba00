//! Expense repository for JSON storage
//!
//! Manages loading and saving the ledger to expense.json. The file holds a
//! bare JSON array of expense objects and is rewritten in full on every save.

use std::path::{Path, PathBuf};

use crate::error::SpendrError;
use crate::models::{Expense, Ledger};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// File-backed expense store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonFileStore {
    fn load(&self) -> Result<Ledger, SpendrError> {
        let expenses: Vec<Expense> = read_json(&self.path)?;
        Ok(Ledger::from(expenses))
    }

    fn save(&self, ledger: &Ledger) -> Result<(), SpendrError> {
        write_json_atomic(&self.path, ledger.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonFileStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.json");
        let store = JsonFileStore::new(path);
        (temp_dir, store)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        let ledger = store.load().unwrap();
        assert!(ledger.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, store) = create_test_store();

        let mut ledger = store.load().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let added = ledger.add("Groceries", "Food", Money::from_cents(4599), date);
        store.save(&ledger).unwrap();

        let reopened = JsonFileStore::new(temp_dir.path().join("expense.json"));
        let reloaded = reopened.load().unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get(added.id), Some(&added));
    }

    #[test]
    fn test_file_is_bare_array() {
        let (_temp_dir, store) = create_test_store();

        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        ledger.add("Coffee", "Food", Money::from_cents(300), date);
        store.save(&ledger).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        let records = raw.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["amount"], 3);
    }

    #[test]
    fn test_reads_file_written_by_hand() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            r#"[
  {"id": 1, "description": "Lunch", "category": "Food", "amount": 120.5, "date": "2024-03-05"},
  {"id": 3, "description": "Bus", "category": "Travel", "amount": 30, "date": "2024-03-06"}
]"#,
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.next_id(), ExpenseId::new(4));
        assert_eq!(ledger.total(), Some(Money::from_cents(15050)));
    }

    #[test]
    fn test_malformed_file_fails() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "{ this is not a ledger").unwrap();

        assert!(matches!(store.load(), Err(SpendrError::Storage(_))));
    }
}
