//! Spending limit display formatting

use super::report::{format_amount, format_bar, format_percentage};
use crate::config::Settings;
use crate::ledger::{AlertLevel, Ledger, LimitAlert};

/// Format every limit with its cached spend, what is left and a usage bar
///
/// Limits at or past the alert threshold get their alert level appended.
pub fn format_limit_list(ledger: &Ledger, settings: &Settings) -> String {
    let limits = ledger.spending_limits();
    if limits.is_empty() {
        return "No spending limits set.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20}  {:>12}  {:>12}  {:>12}  {:>7}\n",
        "Category", "Spent", "Limit", "Remaining", "Usage"
    ));
    output.push_str(&"-".repeat(86));
    output.push('\n');

    for limit in limits {
        let name = ledger
            .category_name(Some(limit.category_id))
            .unwrap_or("(unknown)");
        let usage = limit.usage_ratio().unwrap_or(0.0) * 100.0;
        let status = ledger
            .alert_for(limit.category_id)
            .map(|alert| format!("  {}", alert.level))
            .unwrap_or_default();

        output.push_str(&format!(
            "{:<20}  {:>12}  {:>12}  {:>12}  {:>7}  {}{}\n",
            super::truncate(name, 20),
            format_amount(symbol, limit.current_spent),
            format_amount(symbol, limit.monthly_limit),
            format_amount(symbol, limit.remaining()),
            format_percentage(usage),
            format_bar(usage, 100.0, 10),
            status
        ));
    }

    output
}

/// Format a single alert as a warning line
pub fn format_alert(alert: &LimitAlert, settings: &Settings) -> String {
    let marker = match alert.level {
        AlertLevel::Approaching => "!",
        AlertLevel::Exceeded => "!!",
    };
    format!(
        "{} {}: {} ({}/{})",
        marker,
        alert.level,
        alert.category_name,
        format_amount(&settings.currency_symbol, alert.spent),
        format_amount(&settings.currency_symbol, alert.limit)
    )
}

/// Format a batch of alerts, one per line
pub fn format_alerts(alerts: &[LimitAlert], settings: &Settings) -> String {
    alerts
        .iter()
        .map(|a| format!("{}\n", format_alert(a, settings)))
        .collect()
}
