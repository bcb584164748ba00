//! Summary display formatting

use crate::services::Summary;

/// Format a summary: the total line, then a budget warning if exceeded
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let total = summary.total.format_with_symbol(currency_symbol);

    let mut output = match summary.month {
        Some(month) => format!("Total expenses for {}: {}\n", month.name(), total),
        None => format!("Total expenses: {}\n", total),
    };

    if let Some(budget) = summary.budget.filter(|_| summary.is_over_budget()) {
        let budget = budget.format_with_symbol(currency_symbol);
        match summary.month {
            Some(month) => output.push_str(&format!(
                "Warning: You have exceeded your budget of {} for {}\n",
                budget,
                month.name()
            )),
            None => output.push_str(&format!(
                "Warning: You have exceeded your budget of {}\n",
                budget
            )),
        }
    }

    output
}
