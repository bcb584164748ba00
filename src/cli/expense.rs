//! Expense CLI commands
//!
//! Implements `add`, `delete`, `list`, `filter`, and `summary` with the
//! short flag names `--desc`, `--amt`, and `--cat`.

use clap::Subcommand;

use crate::config::CategoryMatch;
use crate::display::{
    format_category_listing, format_expense_added, format_expense_table, format_summary,
    EMPTY_LEDGER_MESSAGE,
};
use crate::error::SpendrResult;
use crate::services::{
    parse_amount, parse_date, parse_id, parse_month, CreateExpenseInput, SummaryQuery,
};

use super::CliContext;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(long = "desc")]
        description: String,
        /// Amount of the expense (e.g., "250" or "12.50")
        #[arg(long = "amt", allow_negative_numbers = true)]
        amount: String,
        /// Category of the expense
        #[arg(long = "cat")]
        category: String,
        /// Date of the expense (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an existing expense
    Delete {
        /// ID of the expense
        #[arg(long)]
        id: String,
    },
    /// List all expenses
    List,
    /// Filter expenses by category
    Filter {
        /// Category to filter by
        #[arg(long = "cat")]
        category: String,
        /// Compare categories case-insensitively
        #[arg(short, long)]
        ignore_case: bool,
    },
    /// Show total expenses
    Summary {
        /// Restrict to a month (1-12, any year)
        #[arg(long)]
        month: Option<String>,
        /// Warn when the total exceeds this budget
        #[arg(long)]
        budget: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ctx: &CliContext, cmd: ExpenseCommands) -> SpendrResult<()> {
    let service = ctx.service();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let expense = service.create(CreateExpenseInput {
                description,
                category,
                amount,
                date,
            })?;

            println!("{}", format_expense_added(&expense));
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            match service.delete(id)? {
                Some(expense) => println!("Expense deleted successfully (ID: {})", expense.id),
                None => println!("Expense with ID {} not found.", id),
            }
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses, &ctx.settings.date_format));
        }

        ExpenseCommands::Filter {
            category,
            ignore_case,
        } => {
            let mode = if ignore_case {
                CategoryMatch::IgnoreCase
            } else {
                ctx.settings.category_match
            };

            let ledger = service.load()?;
            if ledger.is_empty() {
                println!("{}", EMPTY_LEDGER_MESSAGE);
                return Ok(());
            }

            let matches: Vec<_> = ledger.filter_by_category(&category, mode).cloned().collect();
            print!(
                "{}",
                format_category_listing(&category, &matches, &ctx.settings.currency_symbol)
            );
        }

        ExpenseCommands::Summary { month, budget } => {
            let mut query = SummaryQuery::new();
            if let Some(month) = month {
                query = query.month(parse_month(&month)?);
            }
            if let Some(budget) = budget {
                query = query.budget(parse_amount(&budget)?);
            }

            let summary = service.summarize(query)?;
            print!("{}", format_summary(&summary, &ctx.settings.currency_symbol));
        }
    }

    Ok(())
}
