//! Text charts for spending reports

use crate::config::Settings;
use crate::reports::{ChartKind, SpendingReport};

const BAR_WIDTH: usize = 30;

/// Message shown when there is nothing to chart
pub const NOT_ENOUGH_DATA: &str = "Not enough data to analyse yet.";

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Draw a bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render a spending report as the requested chart
pub fn format_chart(report: &SpendingReport, kind: ChartKind, settings: &Settings) -> String {
    let mut output = String::new();

    let title = match kind {
        ChartKind::Pie => "Spending share by category",
        ChartKind::Bar => "Spending by category",
    };
    output.push_str(title);
    if let Some(range) = &report.range {
        output.push_str(&format!(" ({})", range));
    }
    output.push('\n');
    output.push_str(&"─".repeat(title.chars().count()));
    output.push('\n');

    if !report.has_data() {
        output.push_str(NOT_ENOUGH_DATA);
        output.push('\n');
        return output;
    }

    let name_width = report
        .categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);

    match kind {
        ChartKind::Pie => {
            // A pie slice of zero is not drawn
            for c in report.categories.iter().filter(|c| c.spent.is_positive()) {
                output.push_str(&format!(
                    "{:<name_width$}  {} {:>6}\n",
                    c.category,
                    format_bar(c.percentage, 100.0, BAR_WIDTH),
                    format_percentage(c.percentage),
                ));
            }
        }
        ChartKind::Bar => {
            let max = report
                .categories
                .iter()
                .map(|c| c.spent.as_f64())
                .fold(0.0, f64::max);
            for c in &report.categories {
                output.push_str(&format!(
                    "{:<name_width$}  {} {}\n",
                    c.category,
                    format_bar(c.spent.as_f64(), max, BAR_WIDTH),
                    settings.format_money(c.spent),
                ));
            }
        }
    }

    output.push_str(&format!(
        "\nTotal spent: {} across {} expense(s)\n",
        settings.format_money(report.total_spent),
        report.expense_count
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::reports::CategorySpending;

    fn spending(category: &str, cents: i64, percentage: f64) -> CategorySpending {
        CategorySpending {
            category: category.into(),
            spent: Money::from_cents(cents),
            expense_count: usize::from(cents > 0),
            percentage,
            allocated: true,
        }
    }

    fn report() -> SpendingReport {
        SpendingReport {
            range: None,
            categories: vec![
                spending("Food", 7500, 75.0),
                spending("Rent", 0, 0.0),
                spending("Fun", 2500, 25.0),
            ],
            total_spent: Money::from_cents(10000),
            expense_count: 2,
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.0), "5.0%");
        assert_eq!(format_percentage(75.0), "75%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "░░░");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_pie_skips_empty_slices() {
        let output = format_chart(&report(), ChartKind::Pie, &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("75%"));
        assert!(!output.contains("Rent"));
        assert!(output.contains("Total spent: ¥100.00 across 2 expense(s)"));
    }

    #[test]
    fn test_bar_lists_every_category() {
        let output = format_chart(&report(), ChartKind::Bar, &Settings::default());
        assert!(output.contains("Rent"));
        assert!(output.contains("¥75.00"));
        assert!(output.contains("¥0.00"));
    }

    #[test]
    fn test_not_enough_data() {
        let report = SpendingReport {
            range: None,
            categories: vec![spending("Food", 0, 0.0)],
            total_spent: Money::zero(),
            expense_count: 0,
        };
        let output = format_chart(&report, ChartKind::Bar, &Settings::default());
        assert!(output.contains(NOT_ENOUGH_DATA));
        assert!(!output.contains("Total spent"));
    }
}
