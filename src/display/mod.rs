//! Display formatting for terminal output
//!
//! Turns ledger data into plain text for the command-line layer.

pub mod category;
pub mod limit;
pub mod report;
pub mod transaction;

pub use category::format_category_list;
pub use limit::{format_alert, format_alerts, format_limit_list};
pub use report::{format_amount, format_balance, format_category_summary, format_monthly_summary};
pub use transaction::{format_transaction_details, format_transaction_list};

/// Truncate a string to at most `max` characters, marking the cut with "..."
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
