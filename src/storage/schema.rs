//! Database schema and migrations
//!
//! Amount columns hold integer cents. Expense dates are
//! `YYYY-MM-DD HH:MM:SS` text so they order correctly as strings.
//! Files that still declare amounts as REAL units are rebuilt in place.

use rusqlite::{params, Connection};

use crate::error::BudgetResult;

pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS budget (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    amount   INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS expenses (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    expense  INTEGER NOT NULL,
    note     TEXT,
    date     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);

CREATE TABLE IF NOT EXISTS initial_budget (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    amount INTEGER NOT NULL DEFAULT 0
);
"#;

/// Bring a database up to the current schema
///
/// Safe to run on every open.
pub fn migrate(conn: &Connection) -> BudgetResult<()> {
    conn.execute_batch(SCHEMA)?;

    // Older files may carry an initial_budget table without the amount column
    if !has_column(conn, "initial_budget", "amount")? {
        tracing::info!("Adding missing amount column to initial_budget");
        conn.execute(
            "ALTER TABLE initial_budget ADD COLUMN amount INTEGER NOT NULL DEFAULT 0",
            [],
        )?;
    }

    convert_real_amounts(conn)?;

    let rows: i64 = conn.query_row("SELECT COUNT(*) FROM initial_budget", [], |r| r.get(0))?;
    if rows == 0 {
        conn.execute("INSERT INTO initial_budget (amount) VALUES (?1)", params![0_i64])?;
        tracing::debug!("Seeded initial_budget singleton");
    }

    Ok(())
}

/// Table rebuilds for files whose amount column is REAL
const LEGACY_REBUILDS: [(&str, &str, &str); 3] = [
    (
        "budget",
        "amount",
        r#"
ALTER TABLE budget RENAME TO budget_legacy;
CREATE TABLE budget (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    amount   INTEGER NOT NULL
);
INSERT INTO budget (id, category, amount)
    SELECT id, category, CAST(ROUND(amount * 100) AS INTEGER) FROM budget_legacy;
DROP TABLE budget_legacy;
"#,
    ),
    (
        "expenses",
        "expense",
        r#"
ALTER TABLE expenses RENAME TO expenses_legacy;
CREATE TABLE expenses (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    expense  INTEGER NOT NULL,
    note     TEXT,
    date     TEXT NOT NULL
);
INSERT INTO expenses (id, category, expense, note, date)
    SELECT id, category, CAST(ROUND(expense * 100) AS INTEGER), note, date
    FROM expenses_legacy;
DROP TABLE expenses_legacy;
"#,
    ),
    (
        "initial_budget",
        "amount",
        r#"
ALTER TABLE initial_budget RENAME TO initial_budget_legacy;
CREATE TABLE initial_budget (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    amount INTEGER NOT NULL DEFAULT 0
);
INSERT INTO initial_budget (id, amount)
    SELECT id, CAST(ROUND(amount * 100) AS INTEGER) FROM initial_budget_legacy;
DROP TABLE initial_budget_legacy;
"#,
    ),
];

/// Rewrite REAL unit amounts as integer cents, all tables in one transaction
fn convert_real_amounts(conn: &Connection) -> BudgetResult<()> {
    let mut pending = Vec::new();
    for (table, column, sql) in LEGACY_REBUILDS {
        let declared = column_type(conn, table, column)?;
        if declared.is_some_and(|t| t.eq_ignore_ascii_case("REAL")) {
            pending.push((table, sql));
        }
    }
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    for (table, sql) in pending {
        tracing::info!(table, "Converting REAL amounts to cents");
        tx.execute_batch(sql)?;
    }
    // The expenses index went away with the old table
    tx.execute_batch(SCHEMA)?;
    tx.commit()?;
    Ok(())
}

/// Declared type of a column, `None` if the column does not exist
fn column_type(conn: &Connection, table: &str, column: &str) -> BudgetResult<Option<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(1)?, row.get::<_, String>(2)?))
    })?;
    for entry in columns {
        let (name, declared) = entry?;
        if name == column {
            return Ok(Some(declared));
        }
    }
    Ok(None)
}

fn has_column(conn: &Connection, table: &str, column: &str) -> BudgetResult<bool> {
    Ok(column_type(conn, table, column)?.is_some())
}
