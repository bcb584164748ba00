//! Audit logging for spendr
//!
//! Records every expense added or deleted in an append-only, line-delimited
//! JSON log next to the ledger.
//!
//! - `AuditEntry`: one logged operation with a snapshot of the expense.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
