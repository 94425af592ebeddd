//! Strongly-typed identifier for expense records
//!
//! Expense rows are keyed by their SQLite rowid. Wrapping it keeps a bare
//! `i64` amount or count from being passed where a record id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix used when displaying an expense id
const DISPLAY_PREFIX: char = '#';

/// Stable identifier of a stored expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a database rowid
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying rowid
    pub const fn as_raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
