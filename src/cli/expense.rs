//! Expense CLI commands
//!
//! Record, list and undo expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_summary, format_expense_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{DateRange, ExpenseId};
use crate::services::{parse_expense_amount, Ledger};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense against a category
    Add {
        /// Category name
        category: String,
        /// Amount spent, greater than zero
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show one expense
    Show {
        /// Expense ID as shown by `expense list`
        id: ExpenseId,
    },

    /// Remove an expense and return its amount to the category
    Undo {
        /// Expense ID as shown by `expense list` (e.g., "12" or "#12")
        id: Option<ExpenseId>,
    },
}

/// Build an optional date range from `--from`/`--to` arguments
pub fn parse_range(from: Option<&str>, to: Option<&str>) -> BudgetResult<Option<DateRange>> {
    DateRange::from_bounds(from, to).map_err(|e| BudgetError::InvalidInput(e.to_string()))
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            note,
        } => {
            let amount = parse_expense_amount(&amount)?;
            let record = ledger.record_expense(&category, amount, note.as_deref())?;

            println!("Recorded expense {}", format_expense_summary(&record, settings));
            if let Some(remaining) = ledger.remaining(&record.category) {
                println!(
                    "  Remaining in {}: {}",
                    record.category,
                    settings.format_money(remaining)
                );
            }
        }

        ExpenseCommands::List { from, to } => {
            let range = parse_range(from.as_deref(), to.as_deref())?;
            let records = ledger.list_expenses(range.as_ref())?;
            print!("{}", format_expense_table(&records, range.as_ref(), settings));
        }

        ExpenseCommands::Show { id } => {
            let record = ledger
                .find_expense(id)?
                .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;
            println!("{}", format_expense_summary(&record, settings));
        }

        ExpenseCommands::Undo { id } => {
            let record = ledger.undo_expense(id)?;

            println!("Undid expense {}", format_expense_summary(&record, settings));
            if let Some(remaining) = ledger.remaining(&record.category) {
                println!(
                    "  Remaining in {}: {}",
                    record.category,
                    settings.format_money(remaining)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert!(parse_range(None, None).unwrap().is_none());

        let range = parse_range(Some("2024-03-01"), None).unwrap().unwrap();
        assert_eq!(range.start(), range.end());

        let err = parse_range(Some("2024-03-05"), Some("2024-03-01")).unwrap_err();
        assert!(err.is_invalid_input());

        let err = parse_range(Some("March 1st"), None).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
