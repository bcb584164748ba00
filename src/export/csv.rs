//! CSV Export functionality
//!
//! Writes the ledger as comma-separated values with a header row matching the
//! expense field names. The header is always written, so an empty ledger
//! exports as a single header line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{SpendrError, SpendrResult};
use crate::models::Expense;

/// Header row, in the same order as the expense fields on disk
pub const CSV_HEADER: [&str; 5] = ["id", "description", "category", "amount", "date"];

/// Export expenses to any writer, returning the number of rows written
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendrResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.description.clone(),
            expense.category.clone(),
            expense.amount.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendrError::Export(format!("Failed to flush CSV output: {}", e)))?;

    Ok(expenses.len())
}

/// Export expenses to a file, overwriting it if it exists
pub fn export_expenses_csv_file(expenses: &[Expense], path: &Path) -> SpendrResult<usize> {
    let file = File::create(path).map_err(|e| {
        SpendrError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let count = export_expenses_csv(expenses, &mut writer)?;

    writer.flush().map_err(|e| {
        SpendrError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    Ok(count)
}
