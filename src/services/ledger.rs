//! Ledger engine
//!
//! Keeps the category allocations, the running total and the expense log
//! consistent with each other. The in-memory allocation list mirrors the
//! `budget` table; every write that touches more than one row goes through
//! a single store transaction, and memory is only updated once it commits.

use crate::error::{BudgetError, BudgetResult};
use crate::models::expense::{normalize_note, now_timestamp};
use crate::models::{BudgetAllocation, DateRange, ExpenseId, ExpenseRecord, Money};
use crate::storage::{allocations, expenses, Store};

use super::events::{LedgerEvent, Listener};

/// Remaining amount under which a category triggers a low-balance notice
pub const DEFAULT_LOW_BALANCE_THRESHOLD: Money = Money::from_cents(5000);

/// Parse a user-entered expense amount
///
/// The amount must be a number greater than zero.
pub fn parse_expense_amount(input: &str) -> BudgetResult<Money> {
    if input.trim().is_empty() {
        return Err(BudgetError::InvalidInput("Please enter an amount".into()));
    }
    let amount = Money::parse(input).map_err(|e| BudgetError::InvalidInput(e.to_string()))?;
    // Fractions of a cent truncate to zero
    if amount.is_zero()
        && !input.trim_start().starts_with('-')
        && input.chars().any(|c| matches!(c, '1'..='9'))
    {
        return Err(BudgetError::InvalidInput(format!(
            "'{}' is less than one cent",
            input.trim()
        )));
    }
    if !amount.is_positive() {
        return Err(BudgetError::InvalidInput(
            "Expense amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

/// Parse a user-entered category allocation; any sign is accepted
pub fn parse_allocation_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::InvalidInput(e.to_string()))
}

fn amount_overflow() -> BudgetError {
    BudgetError::InvalidInput("Total budget exceeds the largest supported amount".into())
}

/// Sum of all allocations, or an error if it does not fit
fn total_of(allocations: &[BudgetAllocation]) -> BudgetResult<Money> {
    Money::checked_sum(allocations.iter().map(|a| &a.amount)).ok_or_else(amount_overflow)
}

/// The budget ledger
pub struct Ledger {
    store: Store,
    /// Unique by category, in creation order
    allocations: Vec<BudgetAllocation>,
    total: Money,
    low_balance_threshold: Money,
    listeners: Vec<Listener>,
}

impl Ledger {
    /// Take ownership of a store and load its current state
    pub fn new(store: Store) -> BudgetResult<Self> {
        let mut ledger = Self {
            store,
            allocations: Vec::new(),
            total: Money::zero(),
            low_balance_threshold: DEFAULT_LOW_BALANCE_THRESHOLD,
            listeners: Vec::new(),
        };
        ledger.load_from_store()?;
        Ok(ledger)
    }

    /// Override the low-balance threshold
    pub fn with_low_balance_threshold(mut self, threshold: Money) -> Self {
        self.low_balance_threshold = threshold;
        self
    }

    /// Register a callback for ledger events
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&LedgerEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: LedgerEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Give the store back, e.g. before reopening the ledger
    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // === Read accessors ===

    /// Category names in creation order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.allocations.iter().map(|a| a.category.as_str())
    }

    pub fn allocations(&self) -> &[BudgetAllocation] {
        &self.allocations
    }

    /// Remaining amount for a category
    pub fn remaining(&self, category: &str) -> Option<Money> {
        self.position(category).map(|i| self.allocations[i].amount)
    }

    /// Sum of all remaining amounts
    pub fn total(&self) -> Money {
        self.total
    }

    /// The total as persisted by the last save
    pub fn stored_total(&self) -> BudgetResult<Money> {
        self.store.load_total()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.allocations.iter().position(|a| a.category == category)
    }

    // === Mutations ===

    /// Record an expense against a category
    ///
    /// The amount must be positive and no larger than what remains in the
    /// category. On success the category and the total drop by `amount`,
    /// the expense is stored with the current time, and the allocations are
    /// rewritten, all in one transaction.
    pub fn record_expense(
        &mut self,
        category: &str,
        amount: Money,
        note: Option<&str>,
    ) -> BudgetResult<ExpenseRecord> {
        if !amount.is_positive() {
            return Err(BudgetError::InvalidInput(
                "Expense amount must be greater than zero".into(),
            ));
        }

        let index = self
            .position(category)
            .ok_or_else(|| BudgetError::UnknownCategory(category.to_string()))?;

        let available = self.allocations[index].amount;
        if amount > available {
            return Err(BudgetError::InsufficientBudget {
                category: category.to_string(),
                needed: amount,
                available,
            });
        }

        let mut updated = self.allocations.clone();
        updated[index].amount -= amount;
        let total = total_of(&updated)?;

        let note = normalize_note(note);
        let timestamp = now_timestamp();

        let record = self.store.transaction(|tx| {
            let record = expenses::insert_expense(tx, category, amount, note.as_deref(), timestamp)?;
            allocations::replace_allocations(tx, &updated)?;
            allocations::write_total(tx, total)?;
            Ok(record)
        })?;

        let remaining = updated[index].amount;
        self.allocations = updated;
        self.total = total;

        tracing::info!(
            id = %record.id,
            category,
            amount = %amount,
            remaining = %remaining,
            "Recorded expense"
        );
        self.emit(LedgerEvent::ExpenseRecorded(record.clone()));

        if remaining < self.low_balance_threshold {
            tracing::warn!(category, remaining = %remaining, "Category budget is running low");
            let threshold = self.low_balance_threshold;
            self.emit(LedgerEvent::LowBalance {
                category: category.to_string(),
                remaining,
                threshold,
            });
        }

        Ok(record)
    }

    /// Reverse a recorded expense
    ///
    /// The record is removed and its amount returned to its category,
    /// recreating the category if it was deleted in the meantime. State is
    /// reloaded from the store afterwards.
    pub fn undo_expense(&mut self, id: Option<ExpenseId>) -> BudgetResult<ExpenseRecord> {
        let id = id.ok_or(BudgetError::NoSelection)?;

        let record = self
            .store
            .get_expense(id)?
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        let mut updated = self.allocations.clone();
        match updated.iter_mut().find(|a| a.category == record.category) {
            Some(allocation) => {
                allocation.amount = allocation
                    .amount
                    .checked_add(record.amount)
                    .ok_or_else(amount_overflow)?;
            }
            None => updated.push(BudgetAllocation::new(record.category.clone(), record.amount)),
        }
        let total = total_of(&updated)?;

        self.store.transaction(|tx| {
            if expenses::delete_expense(tx, id)? == 0 {
                return Err(BudgetError::Storage(format!(
                    "Failed to delete expense {}",
                    id
                )));
            }
            allocations::replace_allocations(tx, &updated)?;
            allocations::write_total(tx, total)
        })?;

        self.load_from_store()?;

        tracing::info!(id = %record.id, category = %record.category, amount = %record.amount, "Undid expense");
        self.emit(LedgerEvent::ExpenseUndone(record.clone()));

        Ok(record)
    }

    /// Create a category with an initial allocation
    ///
    /// Any amount is accepted. The name is not checked against existing
    /// categories: a repeated name replaces the amount in memory and adds a
    /// second row to the store, which the next save collapses.
    pub fn create_category(&mut self, name: &str, amount: Money) -> BudgetResult<()> {
        let allocation = BudgetAllocation::new(name.trim(), amount);
        allocation
            .validate()
            .map_err(|e| BudgetError::InvalidInput(e.to_string()))?;

        let mut updated = self.allocations.clone();
        match self.position(&allocation.category) {
            Some(index) => updated[index].amount = amount,
            None => updated.push(allocation.clone()),
        }
        let total = total_of(&updated)?;

        self.store.insert_allocation(&allocation)?;
        self.allocations = updated;
        self.total = total;

        tracing::info!(category = %allocation.category, amount = %amount, "Created category");
        self.emit(LedgerEvent::CategoryCreated {
            category: allocation.category,
            amount,
        });
        Ok(())
    }

    /// Delete a category
    ///
    /// Expenses recorded against it stay in the history.
    pub fn delete_category(&mut self, name: &str) -> BudgetResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| BudgetError::UnknownCategory(name.to_string()))?;

        let mut updated = self.allocations.clone();
        let removed = updated.remove(index);
        let total = total_of(&updated)?;

        self.store.delete_allocation(name)?;
        self.allocations = updated;
        self.total = total;

        tracing::info!(category = %removed.category, "Deleted category");
        self.emit(LedgerEvent::CategoryDeleted {
            category: removed.category,
        });
        Ok(())
    }

    /// Rebuild the in-memory state from the store
    ///
    /// Repeated category rows resolve to the value of the last one, at the
    /// position of the first.
    pub fn load_from_store(&mut self) -> BudgetResult<()> {
        let rows = self.store.load_allocations()?;

        let mut allocations: Vec<BudgetAllocation> = Vec::with_capacity(rows.len());
        for row in rows {
            match allocations.iter_mut().find(|a| a.category == row.category) {
                Some(existing) => existing.amount = row.amount,
                None => allocations.push(row),
            }
        }

        self.total = total_of(&allocations)?;
        self.allocations = allocations;

        tracing::debug!(
            categories = self.allocations.len(),
            total = %self.total,
            "Loaded allocations"
        );
        self.emit(LedgerEvent::Reloaded);
        Ok(())
    }

    /// Persist the allocations and total, replacing what the store holds
    pub fn save_to_store(&mut self) -> BudgetResult<()> {
        self.total = total_of(&self.allocations)?;
        self.store.save_allocations(&self.allocations, self.total)?;
        tracing::debug!(total = %self.total, "Saved allocations");
        Ok(())
    }

    // === Queries ===

    /// Expense history, newest first, optionally limited to a date range
    pub fn list_expenses(&self, range: Option<&DateRange>) -> BudgetResult<Vec<ExpenseRecord>> {
        self.store.list_expenses(range)
    }

    pub fn find_expense(&self, id: ExpenseId) -> BudgetResult<Option<ExpenseRecord>> {
        self.store.get_expense(id)
    }

    /// Total spent per category
    ///
    /// Every current category appears, in creation order, even with nothing
    /// spent. Categories that only survive in the history follow, in order
    /// of first appearance.
    pub fn aggregate_by_category(&self, records: &[ExpenseRecord]) -> Vec<(String, Money)> {
        let mut totals: Vec<(String, Money)> = self
            .allocations
            .iter()
            .map(|a| (a.category.clone(), Money::zero()))
            .collect();

        for record in records {
            match totals.iter_mut().find(|(name, _)| *name == record.category) {
                Some((_, spent)) => *spent = spent.saturating_add(record.amount),
                None => totals.push((record.category.clone(), record.amount)),
            }
        }

        totals
    }
}
