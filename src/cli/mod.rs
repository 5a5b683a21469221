//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the ledger. Every handler works on a ledger that
//! is already loaded and reports whether it changed it, so the caller knows
//! whether to save.

pub mod category;
pub mod limit;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use limit::{handle_limit_command, LimitCommands};
pub use report::{handle_balance, handle_summary};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Category, TransactionId};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a strictly positive amount such as "12" or "12.50"
pub(crate) fn parse_amount(s: &str) -> TrackerResult<f64> {
    let amount: f64 = s
        .trim()
        .trim_start_matches('$')
        .parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid amount: '{}'", s)))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(TrackerError::Validation(format!(
            "Amount must be a positive number, got '{}'",
            s
        )));
    }

    Ok(amount)
}

/// Find a category by name (case-insensitive)
pub(crate) fn resolve_category<'a>(ledger: &'a Ledger, name: &str) -> TrackerResult<&'a Category> {
    ledger
        .find_category(name)
        .ok_or_else(|| TrackerError::category_not_found(name))
}

/// Map a 1-based row number from `transaction list` to a transaction
pub(crate) fn resolve_transaction(ledger: &Ledger, number: usize) -> TrackerResult<TransactionId> {
    number
        .checked_sub(1)
        .and_then(|index| ledger.transactions().get(index))
        .map(|t| t.id)
        .ok_or_else(|| TrackerError::transaction_not_found(format!("#{}", number)))
}
