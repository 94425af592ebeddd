//! Category CLI commands
//!
//! Create, list and delete budget categories.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::BudgetResult;
use crate::services::{parse_allocation_amount, Ledger};

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List category names in creation order
    List,

    /// Create a category with an initial allocation
    Create {
        /// Category name
        name: String,
        /// Amount allocated (e.g., "500" or "500.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete a category (its expense history is kept)
    Delete {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(ledger.categories()));
        }

        CategoryCommands::Create { name, amount } => {
            let amount = parse_allocation_amount(&amount)?;
            ledger.create_category(&name, amount)?;

            println!(
                "Created category: {} ({})",
                name.trim(),
                settings.format_money(amount)
            );
        }

        CategoryCommands::Delete { name } => {
            ledger.delete_category(&name)?;
            println!("Deleted category: {}", name);
        }
    }

    Ok(())
}
