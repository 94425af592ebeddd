//! Allocation display formatting
//!
//! Renders per-category remaining amounts with a closing total row.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{BudgetAllocation, Money};

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "")]
    status: &'static str,
}

/// Format the balance table shown after every change
pub fn format_balance_table(
    allocations: &[BudgetAllocation],
    total: Money,
    settings: &Settings,
) -> String {
    if allocations.is_empty() {
        return "No categories yet.\n\nRun 'budget category create <name> <amount>' to add one.\n"
            .to_string();
    }

    let mut rows: Vec<AllocationRow> = allocations
        .iter()
        .map(|a| AllocationRow {
            category: a.category.clone(),
            remaining: settings.format_money(a.amount),
            status: if a.is_below(settings.low_balance_threshold) {
                "low"
            } else {
                ""
            },
        })
        .collect();

    rows.push(AllocationRow {
        category: "Total".to_string(),
        remaining: settings.format_money(total),
        status: "",
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the category names, one per line
pub fn format_category_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut output = String::new();
    for name in names {
        output.push_str(name);
        output.push('\n');
    }

    if output.is_empty() {
        return "No categories found.\n".to_string();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let output = format_balance_table(&[], Money::zero(), &Settings::default());
        assert!(output.starts_with("No categories yet."));
    }

    #[test]
    fn test_table_has_total_and_low_marker() {
        let allocations = vec![
            BudgetAllocation::new("Food", Money::from_cents(4500)),
            BudgetAllocation::new("Rent", Money::from_cents(90000)),
        ];
        let output =
            format_balance_table(&allocations, Money::from_cents(94500), &Settings::default());

        assert!(output.contains("Food"));
        assert!(output.contains("¥45.00"));
        assert!(output.contains("Total"));
        assert!(output.contains("¥945.00"));
        assert_eq!(output.matches("low").count(), 1);
    }

    #[test]
    fn test_category_list_order() {
        assert_eq!(format_category_list(["Rent", "Food"]), "Rent\nFood\n");
        assert_eq!(format_category_list([]), "No categories found.\n");
    }
}
