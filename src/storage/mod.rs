//! Storage layer for the budget tracker
//!
//! A single SQLite connection holds three tables: `budget` (allocations),
//! `initial_budget` (the saved total) and `expenses`. The [`Store`] is
//! opened once and handed to the ledger, which owns it for the rest of the
//! process.

pub mod allocations;
pub mod expenses;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Transaction};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetAllocation, DateRange, ExpenseId, ExpenseRecord, Money};

/// Owned handle to the budget database
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open (creating if needed) the database file and bring its schema up to date
    pub fn open(path: &Path) -> BudgetResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BudgetError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tracing::debug!(path = %path.display(), "Opening budget database");
        let conn = Connection::open(path).map_err(|e| {
            BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;
        schema::migrate(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a private in-memory database (useful for testing)
    pub fn open_in_memory() -> BudgetResult<Self> {
        let conn = Connection::open_in_memory()?;
        schema::migrate(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Location of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` inside a transaction, committing on success
    ///
    /// Any error rolls the whole unit back.
    pub fn transaction<T, F>(&mut self, f: F) -> BudgetResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> BudgetResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    // === Allocations ===

    pub fn load_allocations(&self) -> BudgetResult<Vec<BudgetAllocation>> {
        allocations::load_allocations(&self.conn)
    }

    pub fn insert_allocation(&self, allocation: &BudgetAllocation) -> BudgetResult<()> {
        allocations::insert_allocation(&self.conn, allocation)
    }

    pub fn delete_allocation(&self, category: &str) -> BudgetResult<usize> {
        allocations::delete_allocation(&self.conn, category)
    }

    /// Replace every allocation row and the saved total in one transaction
    pub fn save_allocations(
        &mut self,
        rows: &[BudgetAllocation],
        total: Money,
    ) -> BudgetResult<()> {
        self.transaction(|tx| {
            allocations::replace_allocations(tx, rows)?;
            allocations::write_total(tx, total)
        })
    }

    /// The total as last saved
    pub fn load_total(&self) -> BudgetResult<Money> {
        allocations::load_total(&self.conn)
    }

    // === Expenses ===

    pub fn get_expense(&self, id: ExpenseId) -> BudgetResult<Option<ExpenseRecord>> {
        expenses::get_expense(&self.conn, id)
    }

    pub fn list_expenses(&self, range: Option<&DateRange>) -> BudgetResult<Vec<ExpenseRecord>> {
        expenses::list_expenses(&self.conn, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("my_budget.db");

        let store = Store::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("my_budget.db");

        {
            let mut store = Store::open(&path).unwrap();
            store
                .save_allocations(
                    &[BudgetAllocation::new("Food", Money::from_cents(10000))],
                    Money::from_cents(10000),
                )
                .unwrap();
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.load_allocations().unwrap().len(), 1);
        assert_eq!(store.load_total().unwrap(), Money::from_cents(10000));
    }

    #[test]
    fn test_failed_transaction_rolls_back() {
        let mut store = Store::open_in_memory().unwrap();
        store
            .insert_allocation(&BudgetAllocation::new("Food", Money::from_cents(100)))
            .unwrap();

        let result: BudgetResult<()> = store.transaction(|tx| {
            allocations::replace_allocations(tx, &[])?;
            Err(BudgetError::Storage("simulated failure".into()))
        });

        assert!(result.is_err());
        assert_eq!(store.load_allocations().unwrap().len(), 1);
    }
}
