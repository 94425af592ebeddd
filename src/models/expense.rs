//! Expense record model
//!
//! Expenses are appended when submitted and deleted on undo. They are never
//! edited in place. The category is a plain name: deleting the category
//! leaves its expense history behind.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Storage format of expense timestamps; sorts lexicographically
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Stable record identifier
    pub id: ExpenseId,

    /// Category the expense was charged against
    pub category: String,

    /// Amount spent, always positive
    pub amount: Money,

    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Local time the expense was recorded, second precision
    pub timestamp: NaiveDateTime,
}

impl ExpenseRecord {
    /// The note, or an empty string
    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// Timestamp rendered in storage format
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.timestamp_string(),
            self.category,
            self.amount
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({})", note)?;
        }
        Ok(())
    }
}

/// Normalize a user note: blank notes are stored as absent
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// Current local time truncated to whole seconds
pub fn now_timestamp() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(note: Option<&str>) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::from_raw(3),
            category: "Food".into(),
            amount: Money::from_cents(3000),
            note: note.map(String::from),
            timestamp: NaiveDate::from_ymd_opt(2024, 3, 9)
                .unwrap()
                .and_hms_opt(12, 5, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_timestamp_string() {
        assert_eq!(record(None).timestamp_string(), "2024-03-09 12:05:00");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            record(Some("lunch")).to_string(),
            "#3 2024-03-09 12:05:00 Food 30.00 (lunch)"
        );
        assert_eq!(record(None).to_string(), "#3 2024-03-09 12:05:00 Food 30.00");
    }

    #[test]
    fn test_normalize_note() {
        assert_eq!(normalize_note(Some("  lunch ")), Some("lunch".to_string()));
        assert_eq!(normalize_note(Some("   ")), None);
        assert_eq!(normalize_note(None), None);
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(now_timestamp().nanosecond(), 0);
    }
}
