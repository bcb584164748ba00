//! Export module for spendr
//!
//! Writes the ledger out in spreadsheet-friendly CSV.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_csv_file, CSV_HEADER};
