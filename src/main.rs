use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_ledger_command, low_balance_warning, run_shell, LedgerCommands, ShellExit,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::display::format_balance_table;
use budget_tracker::services::Ledger;
use budget_tracker::storage::Store;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budgeting ledger",
    long_about = "Split your money into categories, record what you spend against \
                  them and see what is left. Data is kept in a single SQLite file."
)]
struct Cli {
    /// Directory holding the database and settings
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Start an interactive session
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        write: bool,
    },
}

fn open_ledger(paths: &BudgetPaths, settings: &Settings) -> Result<Ledger> {
    let store = Store::open(&paths.database_file())?;
    let mut ledger = Ledger::new(store)?.with_low_balance_threshold(settings.low_balance_threshold);
    ledger.subscribe(low_balance_warning(settings));
    Ok(ledger)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    budget_tracker::logging::init(cli.verbose);

    let paths = BudgetPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            if let Err(e) = handle_ledger_command(&mut ledger, &settings, cmd) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Shell) => {
            let mut ledger = open_ledger(&paths, &settings)?;
            print!(
                "{}",
                format_balance_table(ledger.allocations(), ledger.total(), &settings)
            );
            println!("Type 'help' for commands, 'quit' to leave.");

            loop {
                let stdin = std::io::stdin();
                match run_shell(&mut ledger, &settings, stdin.lock())? {
                    ShellExit::Quit => break,
                    ShellExit::Restart => {
                        drop(ledger.into_store());
                        ledger = open_ledger(&paths, &settings)?;
                        if let Some(path) = ledger.store().path() {
                            println!("Reloaded budget from {}", path.display());
                        }
                    }
                }
            }
        }
        Some(Commands::Config { write }) => {
            if write {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!(
                "  Low balance threshold: {}",
                settings.format_money(settings.low_balance_threshold)
            );
            println!("  Date format:           {}", settings.date_format);
            println!("  Default chart:         {:?}", settings.default_chart);
        }
        None => {
            println!("Budget Tracker - personal budgeting ledger");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget shell' to start an interactive session.");
        }
    }

    Ok(())
}
