use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendr::cli::{
    handle_expense_command, handle_export_command, handle_history_command, run_interactive,
    CliContext, ExpenseCommands, ExportArgs,
};
use spendr::config::paths::DATA_DIR_ENV;
use spendr::config::{Settings, SpendrPaths};

#[derive(Parser)]
#[command(
    name = "spendr",
    version,
    about = "Simple expense tracker to manage your finances",
    long_about = "spendr records expenses in a local expense.json file and lets you \
                  list, filter, summarize, and export them from the command line."
)]
struct Cli {
    /// Directory holding expense.json (defaults to the current directory)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to a CSV file
    Export(ExportArgs),

    /// Prompt for commands interactively
    #[command(alias = "i")]
    Interactive,

    /// Show recently added and deleted expenses
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendrPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = CliContext::new(paths, settings);

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&ctx, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&ctx, args)?,
        Some(Commands::Interactive) => {
            let export_path = ctx.default_export_path();
            let stdin = io::stdin();
            run_interactive(
                &ctx.service(),
                &ctx.settings,
                &export_path,
                stdin.lock(),
                io::stdout(),
            )?;
        }
        Some(Commands::History { limit }) => handle_history_command(&ctx, limit)?,
        Some(Commands::Init) => {
            if ctx.paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    ctx.paths.settings_file().display()
                );
            } else {
                ctx.settings.save(&ctx.paths)?;
                println!(
                    "Wrote default settings to: {}",
                    ctx.paths.settings_file().display()
                );
            }
        }
        Some(Commands::Config) => {
            println!("spendr Configuration");
            println!("====================");
            println!("Data directory: {}", ctx.paths.base_dir().display());
            println!("Ledger file:    {}", ctx.paths.expenses_file().display());
            println!("Settings file:  {}", ctx.paths.settings_file().display());
            println!("Audit log:      {}", ctx.paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", ctx.settings.currency_symbol);
            println!("  Category match:  {:?}", ctx.settings.category_match);
            println!("  Export file:     {}", ctx.default_export_path().display());
            println!("  Date format:     {}", ctx.settings.date_format);
        }
        None => {
            println!("spendr - simple expense tracker");
            println!();
            println!("Run 'spendr --help' for usage information.");
            println!("Run 'spendr interactive' to be prompted for each step.");
        }
    }

    Ok(())
}
