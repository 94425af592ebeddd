//! Service layer for the budget tracker
//!
//! The ledger provides the business rules on top of the storage layer:
//! validation, the allocation/total/expense consistency, and change
//! notifications for the views.

pub mod events;
pub mod ledger;

pub use events::{LedgerEvent, Listener};
pub use ledger::{
    parse_allocation_amount, parse_expense_amount, Ledger, DEFAULT_LOW_BALANCE_THRESHOLD,
};
