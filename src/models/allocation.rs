//! Budget allocation model
//!
//! An allocation is the remaining spendable amount of one category. It is
//! created with the category, decremented by expenses, incremented by undo,
//! and dropped when the category is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Remaining spendable amount for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Category name, the key of the allocation
    pub category: String,

    /// Amount still available to spend
    pub amount: Money,
}

impl BudgetAllocation {
    /// Create a new allocation
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Whether the remaining amount sits below the given threshold
    pub fn is_below(&self, threshold: Money) -> bool {
        self.amount < threshold
    }

    /// Validate the allocation
    ///
    /// Only the name is checked. Amounts may take any sign at creation.
    pub fn validate(&self) -> Result<(), AllocationValidationError> {
        if self.category.trim().is_empty() {
            return Err(AllocationValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Validation errors for allocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationValidationError {
    EmptyName,
}

impl fmt::Display for AllocationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for AllocationValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(BudgetAllocation::new("Food", Money::from_cents(100)).validate().is_ok());
        assert_eq!(
            BudgetAllocation::new("   ", Money::zero()).validate(),
            Err(AllocationValidationError::EmptyName)
        );
    }

    #[test]
    fn test_negative_amount_is_allowed() {
        let allocation = BudgetAllocation::new("Debt", Money::from_cents(-2500));
        assert!(allocation.validate().is_ok());
    }

    #[test]
    fn test_is_below() {
        let allocation = BudgetAllocation::new("Food", Money::from_cents(4500));
        assert!(allocation.is_below(Money::from_cents(5000)));
        assert!(!allocation.is_below(Money::from_cents(4500)));
    }
}
