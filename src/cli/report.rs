//! Balance and report CLI commands

use clap::Args;

use crate::config::Settings;
use crate::display::{format_balance_table, format_chart};
use crate::error::BudgetResult;
use crate::reports::{ChartKind, SpendingReport};
use crate::services::Ledger;

use super::expense::parse_range;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Chart to draw (defaults to the configured chart)
    #[arg(long, value_enum)]
    pub chart: Option<ChartKind>,
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Print the per-category remaining amounts and the total
pub fn handle_balance_command(ledger: &Ledger, settings: &Settings) -> BudgetResult<()> {
    print!(
        "{}",
        format_balance_table(ledger.allocations(), ledger.total(), settings)
    );
    Ok(())
}

/// Print a spending chart
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    args: ReportArgs,
) -> BudgetResult<()> {
    let range = parse_range(args.from.as_deref(), args.to.as_deref())?;
    let report = SpendingReport::generate(ledger, range.as_ref())?;
    let kind = args.chart.unwrap_or(settings.default_chart);

    print!("{}", format_chart(&report, kind, settings));
    Ok(())
}
