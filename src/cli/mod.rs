//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod category;
pub mod expense;
pub mod report;
pub mod shell;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_balance_command, handle_report_command, ReportArgs};
pub use shell::{run_shell, ShellExit};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::{Ledger, LedgerEvent};

/// Commands that operate on the ledger, shared by the command line and the shell
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show remaining amounts per category
    Balance,

    /// Chart spending per category
    Report(ReportArgs),
}

/// Handle a ledger command
pub fn handle_ledger_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: LedgerCommands,
) -> BudgetResult<()> {
    match cmd {
        LedgerCommands::Category(cmd) => handle_category_command(ledger, settings, cmd),
        LedgerCommands::Expense(cmd) => handle_expense_command(ledger, settings, cmd),
        LedgerCommands::Balance => handle_balance_command(ledger, settings),
        LedgerCommands::Report(args) => handle_report_command(ledger, settings, args),
    }
}

/// Listener that prints a warning whenever a category runs low
pub fn low_balance_warning(settings: &Settings) -> impl FnMut(&LedgerEvent) + 'static {
    let settings = settings.clone();
    move |event| {
        if let LedgerEvent::LowBalance {
            category,
            remaining,
            threshold,
        } = event
        {
            eprintln!(
                "Warning: '{}' is running low: {} left (below {})",
                category,
                settings.format_money(*remaining),
                settings.format_money(*threshold)
            );
        }
    }
}
