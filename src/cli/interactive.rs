//! Interactive prompt mode
//!
//! A menu loop over any reader/writer pair. Input is validated at the prompt:
//! a bad amount, ID, month, or date prints the error and asks again. End of
//! input leaves the loop cleanly.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::display::{
    format_category_listing, format_expense_added, format_expense_table, format_summary,
    EMPTY_LEDGER_MESSAGE,
};
use crate::error::{SpendrError, SpendrResult};
use crate::services::{
    parse_amount, parse_date, parse_id, parse_month, CreateExpenseInput, ExpenseService,
    SummaryQuery,
};
use crate::storage::ExpenseStore;

const MENU: &str = "\
What would you like to do?
  1. Add an expense
  2. Delete an expense
  3. List expenses
  4. Filter by category
  5. Show summary
  6. Export to CSV
  7. Quit";

/// Whether the menu loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads answers from `input`, writing prompts and results to `output`
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Ask once; `None` means end of input
    fn ask(&mut self, prompt: &str) -> SpendrResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer
    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> SpendrResult<T>,
    ) -> SpendrResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Like `ask_parsed`, but an empty answer is accepted as "not given"
    fn ask_optional<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> SpendrResult<T>,
    ) -> SpendrResult<Option<Option<T>>> {
        self.ask_parsed(prompt, |answer| {
            if answer.is_empty() {
                Ok(None)
            } else {
                parse(answer).map(Some)
            }
        })
    }

    fn say(&mut self, text: &str) -> SpendrResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }
}

fn non_empty(field: &'static str) -> impl Fn(&str) -> SpendrResult<String> {
    move |answer| {
        if answer.is_empty() {
            Err(SpendrError::Validation(format!("{} cannot be empty", field)))
        } else {
            Ok(answer.to_string())
        }
    }
}

fn expense_amount(answer: &str) -> SpendrResult<crate::models::Money> {
    let amount = parse_amount(answer)?;
    if amount.is_negative() {
        return Err(SpendrError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    Ok(amount)
}

/// Run the interactive menu until the user quits or input ends
pub fn run_interactive<S, R, W>(
    service: &ExpenseService<'_, S>,
    settings: &Settings,
    export_path: &Path,
    input: R,
    output: W,
) -> SpendrResult<()>
where
    S: ExpenseStore,
    R: BufRead,
    W: Write,
{
    let mut prompter = Prompter { input, output };

    loop {
        writeln!(prompter.output)?;
        writeln!(prompter.output, "{}", MENU)?;

        let Some(choice) = prompter.ask("Select an option [1-7]: ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => add(service, &mut prompter),
            "2" => delete(service, &mut prompter),
            "3" => list(service, settings, &mut prompter),
            "4" => filter(service, settings, &mut prompter),
            "5" => summary(service, settings, &mut prompter),
            "6" => export(service, export_path, &mut prompter),
            "7" | "q" | "quit" => break,
            other => {
                writeln!(prompter.output, "Unknown option '{}'.", other)?;
                Ok(Flow::Continue)
            }
        };

        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            // Prompt I/O failures end the session; anything else is reported
            Err(e @ SpendrError::Io(_)) => return Err(e),
            Err(e) => writeln!(prompter.output, "Error: {}", e)?,
        }
    }

    writeln!(prompter.output, "Goodbye!")?;
    prompter.output.flush()?;
    Ok(())
}

fn add<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let Some(description) = prompter.ask_parsed("Description: ", non_empty("Description"))? else {
        return Ok(Flow::Quit);
    };
    let Some(category) = prompter.ask_parsed("Category: ", non_empty("Category"))? else {
        return Ok(Flow::Quit);
    };
    let Some(amount) = prompter.ask_parsed("Amount: ", expense_amount)? else {
        return Ok(Flow::Quit);
    };
    let Some(date) = prompter.ask_optional("Date (YYYY-MM-DD) [today]: ", parse_date)? else {
        return Ok(Flow::Quit);
    };

    let expense = service.create(CreateExpenseInput {
        description,
        category,
        amount,
        date,
    })?;

    writeln!(prompter.output, "{}", format_expense_added(&expense))?;
    Ok(Flow::Continue)
}

fn delete<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let Some(id) = prompter.ask_parsed("Expense ID: ", parse_id)? else {
        return Ok(Flow::Quit);
    };

    match service.delete(id)? {
        Some(expense) => writeln!(
            prompter.output,
            "Expense deleted successfully (ID: {})",
            expense.id
        )?,
        None => writeln!(prompter.output, "Expense with ID {} not found.", id)?,
    }
    Ok(Flow::Continue)
}

fn list<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let expenses = service.list()?;
    prompter.say(&format_expense_table(&expenses, &settings.date_format))?;
    Ok(Flow::Continue)
}

fn filter<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let Some(category) = prompter.ask_parsed("Category: ", non_empty("Category"))? else {
        return Ok(Flow::Quit);
    };

    let matches = service.filter_by_category(&category, settings.category_match)?;
    if matches.is_empty() && service.load()?.is_empty() {
        writeln!(prompter.output, "{}", EMPTY_LEDGER_MESSAGE)?;
    } else {
        prompter.say(&format_category_listing(
            &category,
            &matches,
            &settings.currency_symbol,
        ))?;
    }
    Ok(Flow::Continue)
}

fn summary<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let Some(month) = prompter.ask_optional("Month (1-12) [all]: ", parse_month)? else {
        return Ok(Flow::Quit);
    };
    let Some(budget) = prompter.ask_optional("Budget [none]: ", parse_amount)? else {
        return Ok(Flow::Quit);
    };

    let query = SummaryQuery { month, budget };
    let summary = service.summarize(query)?;
    prompter.say(&format_summary(&summary, &settings.currency_symbol))?;
    Ok(Flow::Continue)
}

fn export<S: ExpenseStore, R: BufRead, W: Write>(
    service: &ExpenseService<'_, S>,
    export_path: &Path,
    prompter: &mut Prompter<R, W>,
) -> SpendrResult<Flow> {
    let count = service.export_csv(export_path)?;
    writeln!(
        prompter.output,
        "Exported {} expenses to {}",
        count,
        export_path.display()
    )?;
    Ok(Flow::Continue)
}
