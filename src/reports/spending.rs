//! Spending Report
//!
//! Totals spending per category, optionally within a date range. This is the
//! data behind the pie and bar charts.

use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::{DateRange, Money};
use crate::services::Ledger;

/// Spending of one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category name
    pub category: String,
    /// Total spent
    pub spent: Money,
    /// Number of expenses
    pub expense_count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
    /// False for categories that were deleted but still have history
    pub allocated: bool,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Date range covered, `None` for all history
    pub range: Option<DateRange>,
    /// Every category, current ones first in creation order
    pub categories: Vec<CategorySpending>,
    /// Total spent across all categories
    pub total_spent: Money,
    /// Number of expenses considered
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report
    pub fn generate(ledger: &Ledger, range: Option<&DateRange>) -> BudgetResult<Self> {
        let records = ledger.list_expenses(range)?;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in &records {
            *counts.entry(record.category.as_str()).or_insert(0) += 1;
        }

        let totals = ledger.aggregate_by_category(&records);
        let total_spent = totals
            .iter()
            .fold(Money::zero(), |acc, (_, spent)| acc.saturating_add(*spent));

        let categories = totals
            .into_iter()
            .map(|(category, spent)| {
                let percentage = if total_spent.is_zero() {
                    0.0
                } else {
                    (spent.cents() as f64 / total_spent.cents() as f64) * 100.0
                };
                CategorySpending {
                    expense_count: counts.get(category.as_str()).copied().unwrap_or(0),
                    allocated: ledger.remaining(&category).is_some(),
                    category,
                    spent,
                    percentage,
                }
            })
            .collect();

        Ok(Self {
            range: range.copied(),
            categories,
            total_spent,
            expense_count: records.len(),
        })
    }

    /// Whether there is any spending to chart
    pub fn has_data(&self) -> bool {
        self.expense_count > 0
    }
}
