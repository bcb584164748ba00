//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;
pub mod interactive;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use history::handle_history_command;
pub use interactive::run_interactive;

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{Settings, SpendrPaths};
use crate::services::ExpenseService;
use crate::storage::JsonFileStore;

/// Everything a command handler needs for one invocation
pub struct CliContext {
    pub paths: SpendrPaths,
    pub settings: Settings,
    store: JsonFileStore,
    audit: AuditLogger,
}

impl CliContext {
    /// Build the context for the given data directory and settings
    pub fn new(paths: SpendrPaths, settings: Settings) -> Self {
        Self {
            store: JsonFileStore::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            settings,
        }
    }

    /// Expense service over the ledger file, with audit logging
    pub fn service(&self) -> ExpenseService<'_, JsonFileStore> {
        ExpenseService::new(&self.store).with_audit(&self.audit)
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Export target when `--output` is not given
    pub fn default_export_path(&self) -> PathBuf {
        self.paths.export_file(&self.settings.export_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendrPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ctx = CliContext::new(paths, Settings::default());

        assert_eq!(ctx.default_export_path(), temp_dir.path().join("expenses.csv"));
        assert_eq!(ctx.audit().path(), temp_dir.path().join("audit.log"));
        assert!(ctx.service().list().unwrap().is_empty());
    }
}
