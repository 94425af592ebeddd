//! Expense display formatting
//!
//! Renders the expense history as a table, newest first as given.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{DateRange, ExpenseRecord};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the expense history table
pub fn format_expense_table(
    records: &[ExpenseRecord],
    range: Option<&DateRange>,
    settings: &Settings,
) -> String {
    if records.is_empty() {
        return match range {
            Some(range) => format!("No expenses between {}.\n", range),
            None => "No expenses recorded.\n".to_string(),
        };
    }

    let rows = records.iter().map(|r| ExpenseRow {
        id: r.id.to_string(),
        category: r.category.clone(),
        amount: settings.format_money(r.amount),
        note: r.note_str().to_string(),
        date: r.timestamp.format(&settings.date_format).to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = String::new();
    if let Some(range) = range {
        output.push_str(&format!("Expenses from {}\n", range));
    }
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// One-line summary of an expense, used in confirmations
pub fn format_expense_summary(record: &ExpenseRecord, settings: &Settings) -> String {
    let mut line = format!(
        "{} {} {} on {}",
        record.id,
        record.category,
        settings.format_money(record.amount),
        record.timestamp.format(&settings.date_format)
    );
    if let Some(note) = &record.note {
        line.push_str(&format!(" ({})", note));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;

    fn record() -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::from_raw(4),
            category: "Food".into(),
            amount: Money::from_cents(3000),
            note: Some("lunch".into()),
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_history() {
        let output = format_expense_table(&[], None, &Settings::default());
        assert_eq!(output, "No expenses recorded.\n");

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let output = format_expense_table(&[], Some(&range), &Settings::default());
        assert_eq!(output, "No expenses between 2024-06-01 to 2024-06-01.\n");
    }

    #[test]
    fn test_table_columns() {
        let output = format_expense_table(&[record()], None, &Settings::default());
        for expected in ["ID", "Category", "#4", "Food", "¥30.00", "lunch", "2024-06-01 12:30:00"] {
            assert!(output.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            format_expense_summary(&record(), &Settings::default()),
            "#4 Food ¥30.00 on 2024-06-01 12:30:00 (lunch)"
        );
    }
}
