//! CLI commands for reports

use crate::config::Settings;
use crate::display::{format_balance, format_category_summary, format_monthly_summary};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::YearMonth;
use crate::reports::CategorySummaryReport;

/// Print the monthly summary and per-category breakdown
pub fn handle_summary(
    ledger: &Ledger,
    settings: &Settings,
    month: Option<String>,
) -> TrackerResult<()> {
    let month = match month {
        Some(m) => m.parse::<YearMonth>().map_err(TrackerError::Validation)?,
        None => YearMonth::current(),
    };

    let summary = ledger.monthly_summary(month);
    print!("{}", format_monthly_summary(&summary, settings));
    println!();

    let report = CategorySummaryReport::generate(ledger, month);
    print!("{}", format_category_summary(&report, settings));

    Ok(())
}

/// Print the all-time balance
pub fn handle_balance(ledger: &Ledger, settings: &Settings) {
    print!("{}", format_balance(ledger.current_balance(), settings));
}
