//! Ledger change notifications
//!
//! Views subscribe to the ledger and refresh only what an event touches.

use crate::models::{ExpenseRecord, Money};

/// Something that changed in the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// An expense was stored and its category decremented
    ExpenseRecorded(ExpenseRecord),

    /// An expense was removed and its amount returned to the category
    ExpenseUndone(ExpenseRecord),

    CategoryCreated { category: String, amount: Money },

    CategoryDeleted { category: String },

    /// A category dropped below the low-balance threshold after an expense
    LowBalance {
        category: String,
        remaining: Money,
        threshold: Money,
    },

    /// In-memory state was rebuilt from the store
    Reloaded,
}

impl LedgerEvent {
    /// Whether per-category balances may have changed
    pub fn touches_balances(&self) -> bool {
        !matches!(self, Self::LowBalance { .. })
    }
}

/// Callback registered with [`crate::services::Ledger::subscribe`]
pub type Listener = Box<dyn FnMut(&LedgerEvent)>;
