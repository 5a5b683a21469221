//! Report formatting utilities for terminal output

use crate::config::Settings;
use crate::reports::{CategorySummaryReport, MonthlySummary};

/// Format an amount with the currency symbol, sign in front: "-$15.00"
pub fn format_amount(symbol: &str, amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the all-time balance line
pub fn format_balance(balance: f64, settings: &Settings) -> String {
    format!(
        "Current balance: {}\n",
        format_amount(&settings.currency_symbol, balance)
    )
}

/// Format the income/expense totals and breakdown for a month
pub fn format_monthly_summary(summary: &MonthlySummary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Month: {}\n\n", summary.month));
    output.push_str(&format!(
        "Total Income:   {:>12}\n",
        format_amount(symbol, summary.total_income)
    ));
    output.push_str(&format!(
        "Total Expenses: {:>12}\n",
        format_amount(symbol, summary.total_expenses)
    ));
    output.push_str(&format!(
        "Net Balance:    {:>12}\n",
        format_amount(symbol, summary.net_balance)
    ));

    if !summary.category_breakdown.is_empty() {
        output.push_str("\nBy category:\n");
        for entry in &summary.category_breakdown {
            let label = entry
                .category
                .as_ref()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "(uncategorized)".to_string());
            output.push_str(&format!(
                "  {:<30} {:>12}\n",
                super::truncate(&label, 30),
                format_amount(symbol, entry.total)
            ));
        }
    }

    output
}

/// Format the per-category table with limit usage
pub fn format_category_summary(report: &CategorySummaryReport, settings: &Settings) -> String {
    if report.rows.is_empty() {
        return format!("No categorized transactions in {}.\n", report.month);
    }

    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format!(
        "{:<20}  {:<8}  {:>12}  {:>14}  {:>8}\n",
        "Category", "Type", "Total", "Spending Limit", "Usage %"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for row in &report.rows {
        let limit = row
            .monthly_limit
            .map(|l| format_amount(symbol, l))
            .unwrap_or_else(|| "N/A".to_string());
        let usage = row
            .usage_percent
            .map(format_percentage)
            .unwrap_or_else(|| "N/A".to_string());

        output.push_str(&format!(
            "{:<20}  {:<8}  {:>12}  {:>14}  {:>8}\n",
            super::truncate(&row.category_name, 20),
            row.kind.to_string(),
            format_amount(symbol, row.total),
            limit,
            usage
        ));
    }

    output
}
