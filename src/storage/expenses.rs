//! Expense table access
//!
//! Rows are appended on submission and deleted by id on undo.

use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::BudgetResult;
use crate::models::{DateRange, ExpenseId, ExpenseRecord, Money, TIMESTAMP_FORMAT};

const SELECT_COLUMNS: &str = "SELECT id, category, expense, note, date FROM expenses";

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    let date: String = row.get(4)?;
    let timestamp = NaiveDateTime::parse_from_str(&date, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(ExpenseRecord {
        id: ExpenseId::from_raw(row.get(0)?),
        category: row.get(1)?,
        amount: Money::from_cents(row.get(2)?),
        note: row.get(3)?,
        timestamp,
    })
}

/// Append an expense and return the stored record
pub fn insert_expense(
    conn: &Connection,
    category: &str,
    amount: Money,
    note: Option<&str>,
    timestamp: NaiveDateTime,
) -> BudgetResult<ExpenseRecord> {
    conn.execute(
        "INSERT INTO expenses (category, expense, note, date) VALUES (?1, ?2, ?3, ?4)",
        params![
            category,
            amount.cents(),
            note,
            timestamp.format(TIMESTAMP_FORMAT).to_string()
        ],
    )?;

    Ok(ExpenseRecord {
        id: ExpenseId::from_raw(conn.last_insert_rowid()),
        category: category.to_string(),
        amount,
        note: note.map(str::to_string),
        timestamp,
    })
}

/// Fetch one expense by id
pub fn get_expense(conn: &Connection, id: ExpenseId) -> BudgetResult<Option<ExpenseRecord>> {
    let record = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            params![id.as_raw()],
            row_to_expense,
        )
        .optional()?;
    Ok(record)
}

/// Delete one expense by id. Returns the number of rows removed.
pub fn delete_expense(conn: &Connection, id: ExpenseId) -> BudgetResult<usize> {
    Ok(conn.execute("DELETE FROM expenses WHERE id = ?1", params![id.as_raw()])?)
}

/// List expenses newest first, optionally limited to a date range
pub fn list_expenses(
    conn: &Connection,
    range: Option<&DateRange>,
) -> BudgetResult<Vec<ExpenseRecord>> {
    let records = match range {
        None => {
            let mut stmt =
                conn.prepare(&format!("{} ORDER BY date DESC, id DESC", SELECT_COLUMNS))?;
            let rows = stmt.query_map([], row_to_expense)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        Some(range) => {
            let mut stmt = conn.prepare(&format!(
                "{} WHERE date BETWEEN ?1 AND ?2 ORDER BY date DESC, id DESC",
                SELECT_COLUMNS
            ))?;
            let rows = stmt.query_map(
                params![
                    range.lower_bound().format(TIMESTAMP_FORMAT).to_string(),
                    range.upper_bound().format(TIMESTAMP_FORMAT).to_string()
                ],
                row_to_expense,
            )?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(records)
}
