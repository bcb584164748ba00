//! CLI command for viewing the audit log

use crate::error::SpendrResult;

use super::CliContext;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(ctx: &CliContext, limit: usize) -> SpendrResult<()> {
    let entries = ctx.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
