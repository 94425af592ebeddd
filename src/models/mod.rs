//! Core data models for the budget tracker
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts, category allocations, expense records and the date
//! ranges used to filter history.

pub mod allocation;
pub mod date_range;
pub mod expense;
pub mod ids;
pub mod money;

pub use allocation::{AllocationValidationError, BudgetAllocation};
pub use date_range::{DateRange, DateRangeError};
pub use expense::{ExpenseRecord, TIMESTAMP_FORMAT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
