//! Reports
//!
//! Aggregations over the expense history for charting.

pub mod spending;

pub use spending::{CategorySpending, SpendingReport};

use serde::{Deserialize, Serialize};

/// Kind of chart drawn for a spending report
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Share of spending per category
    #[default]
    Pie,
    /// Amount spent per category
    Bar,
}
