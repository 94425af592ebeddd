//! Interactive shell
//!
//! Reads one command per line and dispatches it through the same clap
//! definitions as the command line. A failing command prints its error and
//! the session goes on.

use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::display::format_balance_table;
use crate::error::BudgetResult;
use crate::services::Ledger;

use super::{handle_ledger_command, LedgerCommands};

const PROMPT: &str = "budget> ";

/// How a shell session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// The user quit or input ran out
    Quit,
    /// The user asked to reopen the store and start over
    Restart,
}

#[derive(Parser, Debug)]
#[command(
    name = "budget",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Reload the budget from disk
    Restart,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Run the shell until `quit`, `restart` or end of input
///
/// The balance table is redrawn after any command that changed it.
pub fn run_shell<R: BufRead>(
    ledger: &mut Ledger,
    settings: &Settings,
    input: R,
) -> BudgetResult<ShellExit> {
    let balances_changed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&balances_changed);
    ledger.subscribe(move |event| {
        if event.touches_balances() {
            flag.set(true);
        }
    });

    prompt()?;

    for line in input.lines() {
        let line = line?;

        if let Some(exit) = dispatch(ledger, settings, &line) {
            return Ok(exit);
        }
        if balances_changed.replace(false) {
            print!(
                "{}",
                format_balance_table(ledger.allocations(), ledger.total(), settings)
            );
        }
        prompt()?;
    }

    println!();
    Ok(ShellExit::Quit)
}

fn prompt() -> BudgetResult<()> {
    print!("{}", PROMPT);
    std::io::stdout().flush()?;
    Ok(())
}

/// Run one line; `Some` ends the session
fn dispatch(ledger: &mut Ledger, settings: &Settings, line: &str) -> Option<ShellExit> {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return None;
        }
    };
    if words.is_empty() {
        return None;
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // Help output comes through here as well
            let _ = e.print();
            return None;
        }
    };

    match parsed.command {
        ShellCommand::Quit => Some(ShellExit::Quit),
        ShellCommand::Restart => {
            tracing::debug!("Restart requested from shell");
            Some(ShellExit::Restart)
        }
        ShellCommand::Ledger(cmd) => {
            if let Err(e) = handle_ledger_command(ledger, settings, cmd) {
                eprintln!("Error: {}", e);
            }
            None
        }
    }
}
