//! Append-only audit log
//!
//! The log is line-delimited JSON: one `AuditEntry` object per line, appended
//! after each successful save of the ledger.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendrError, SpendrResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry as a single line
    pub fn log(&self, entry: &AuditEntry) -> SpendrResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                SpendrError::Io(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, entry)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    /// Every entry in the log, oldest first
    ///
    /// A missing log reads as empty. Blank lines are skipped.
    pub fn read_all(&self) -> SpendrResult<Vec<AuditEntry>> {
        let raw = match fs::read_to_string(&self.log_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        raw.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    SpendrError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> SpendrResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Expense, ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn logger_in(temp_dir: &TempDir) -> AuditLogger {
        AuditLogger::new(temp_dir.path().join("audit.log"))
    }

    fn expense(id: u64) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            "Lunch",
            "Food",
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(logger_in(&temp_dir).read_all().unwrap().is_empty());
    }

    #[test]
    fn test_log_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.log(&AuditEntry::expense_added(&expense(1))).unwrap();
        logger.log(&AuditEntry::expense_deleted(&expense(1))).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].expense, expense(1));

        let raw = fs::read_to_string(logger.path()).unwrap();
        assert_eq!(raw.lines().count(), 2);
    }

    #[test]
    fn test_read_recent_keeps_tail() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        for id in 1..=5 {
            logger.log(&AuditEntry::expense_added(&expense(id))).unwrap();
        }

        let ids: Vec<u64> = logger
            .read_recent(2)
            .unwrap()
            .iter()
            .map(|e| e.expense_id.value())
            .collect();
        assert_eq!(ids, vec![4, 5]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 5);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir);

        logger.log(&AuditEntry::expense_added(&expense(1))).unwrap();
        let mut raw = fs::read_to_string(logger.path()).unwrap();
        raw.push_str("\n{oops\n");
        fs::write(logger.path(), raw).unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, SpendrError::Json(msg) if msg.contains("line 3")));
    }
}
