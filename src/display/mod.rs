//! Display formatting for terminal output
//!
//! Turns ledger state and reports into strings. Nothing here prints.

pub mod allocation;
pub mod chart;
pub mod expense;

pub use allocation::{format_balance_table, format_category_list};
pub use chart::{format_chart, NOT_ENOUGH_DATA};
pub use expense::{format_expense_summary, format_expense_table};
