//! Path management for spendr
//!
//! Every file the tool touches lives under a single base directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command-line flag (if given)
//! 2. `SPENDR_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::SpendrError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "SPENDR_DATA_DIR";

/// Manages all paths used by spendr
#[derive(Debug, Clone)]
pub struct SpendrPaths {
    /// Base directory for all spendr files
    base_dir: PathBuf,
}

impl SpendrPaths {
    /// Resolve paths from an explicit directory, the environment, or the
    /// current directory, in that order
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, SpendrError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => match std::env::var(DATA_DIR_ENV) {
                Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
                _ => std::env::current_dir().map_err(|e| {
                    SpendrError::Config(format!("Could not determine current directory: {}", e))
                })?,
            },
        };

        Ok(Self { base_dir })
    }

    /// Create SpendrPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the ledger file (expense.json)
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expense.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("spendr.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Resolve an export file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn export_file(&self, name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendrError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendrError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendrPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expense.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendrPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_export_file_relative_and_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendrPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.export_file("expenses.csv"),
            temp_dir.path().join("expenses.csv")
        );

        let absolute = temp_dir.path().join("elsewhere").join("out.csv");
        assert_eq!(paths.export_file(&absolute), absolute);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendrPaths::with_base_dir(temp_dir.path().join("nested").join("data"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
