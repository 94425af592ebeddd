//! Allocation and total-budget tables
//!
//! The `budget` table is rewritten wholesale on save. Category names are not
//! unique at the storage level; readers resolve duplicates last-write-wins.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::BudgetResult;
use crate::models::{BudgetAllocation, Money};

/// Read all allocation rows in insertion order
pub fn load_allocations(conn: &Connection) -> BudgetResult<Vec<BudgetAllocation>> {
    let mut stmt = conn.prepare("SELECT category, amount FROM budget ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(BudgetAllocation::new(
            row.get::<_, String>(0)?,
            Money::from_cents(row.get(1)?),
        ))
    })?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Append one allocation row without checking for an existing name
pub fn insert_allocation(conn: &Connection, allocation: &BudgetAllocation) -> BudgetResult<()> {
    conn.execute(
        "INSERT INTO budget (category, amount) VALUES (?1, ?2)",
        params![allocation.category, allocation.amount.cents()],
    )?;
    Ok(())
}

/// Delete every row for a category. Returns the number of rows removed.
pub fn delete_allocation(conn: &Connection, category: &str) -> BudgetResult<usize> {
    Ok(conn.execute("DELETE FROM budget WHERE category = ?1", params![category])?)
}

/// Replace the whole table with the given allocations
///
/// Callers run this inside a transaction so a failure cannot leave the
/// table empty.
pub fn replace_allocations(conn: &Connection, allocations: &[BudgetAllocation]) -> BudgetResult<()> {
    conn.execute("DELETE FROM budget", [])?;

    let mut stmt = conn.prepare("INSERT INTO budget (category, amount) VALUES (?1, ?2)")?;
    for allocation in allocations {
        stmt.execute(params![allocation.category, allocation.amount.cents()])?;
    }
    Ok(())
}

/// Read the singleton total
pub fn load_total(conn: &Connection) -> BudgetResult<Money> {
    let cents: Option<i64> = conn
        .query_row(
            "SELECT amount FROM initial_budget ORDER BY id LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(cents.map(Money::from_cents).unwrap_or_default())
}

/// Overwrite the singleton total
pub fn write_total(conn: &Connection, total: Money) -> BudgetResult<()> {
    let updated = conn.execute(
        "UPDATE initial_budget SET amount = ?1",
        params![total.cents()],
    )?;
    if updated == 0 {
        conn.execute(
            "INSERT INTO initial_budget (amount) VALUES (?1)",
            params![total.cents()],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::migrate;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_keeps_duplicates() {
        let conn = conn();
        insert_allocation(&conn, &BudgetAllocation::new("Food", Money::from_cents(100))).unwrap();
        insert_allocation(&conn, &BudgetAllocation::new("Food", Money::from_cents(200))).unwrap();

        let rows = load_allocations(&conn).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].amount, Money::from_cents(200));
    }

    #[test]
    fn test_replace_allocations() {
        let conn = conn();
        insert_allocation(&conn, &BudgetAllocation::new("Old", Money::from_cents(1))).unwrap();

        let fresh = vec![
            BudgetAllocation::new("Food", Money::from_cents(7000)),
            BudgetAllocation::new("Rent", Money::from_cents(90000)),
        ];
        replace_allocations(&conn, &fresh).unwrap();

        assert_eq!(load_allocations(&conn).unwrap(), fresh);
    }

    #[test]
    fn test_delete_allocation_removes_all_rows_for_name() {
        let conn = conn();
        insert_allocation(&conn, &BudgetAllocation::new("Food", Money::from_cents(1))).unwrap();
        insert_allocation(&conn, &BudgetAllocation::new("Food", Money::from_cents(2))).unwrap();
        insert_allocation(&conn, &BudgetAllocation::new("Rent", Money::from_cents(3))).unwrap();

        assert_eq!(delete_allocation(&conn, "Food").unwrap(), 2);
        assert_eq!(load_allocations(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_total_round_trip() {
        let conn = conn();
        assert_eq!(load_total(&conn).unwrap(), Money::zero());

        write_total(&conn, Money::from_cents(12345)).unwrap();
        assert_eq!(load_total(&conn).unwrap(), Money::from_cents(12345));
    }
}
