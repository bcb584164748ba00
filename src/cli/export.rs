//! CLI command for CSV export

use std::path::PathBuf;

use clap::Args;

use crate::error::SpendrResult;

use super::CliContext;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path (defaults to the configured export file in the data directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(ctx: &CliContext, args: ExportArgs) -> SpendrResult<()> {
    let output = args.output.unwrap_or_else(|| ctx.default_export_path());

    let count = ctx.service().export_csv(&output)?;
    println!("Exported {} expenses to {}", count, output.display());

    Ok(())
}
