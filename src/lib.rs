//! Budget Tracker - personal budgeting ledger
//!
//! Money is split into named categories, each with an allocated amount.
//! Recording an expense draws the category down; undoing it puts the money
//! back. Everything lives in a single SQLite file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Money, allocations, expense records, date ranges
//! - `storage`: SQLite store and schema
//! - `services`: The ledger engine and its change events
//! - `reports`: Spending aggregates for charts
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::services::Ledger;
//! use budget_tracker::storage::Store;
//! use budget_tracker::models::Money;
//!
//! let mut ledger = Ledger::new(Store::open_in_memory()?)?;
//! ledger.create_category("Food", Money::parse("100")?)?;
//! ledger.record_expense("Food", Money::parse("30")?, Some("lunch"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
