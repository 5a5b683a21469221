//! Finance Tracker - personal income and expense ledger
//!
//! This library records income and expense transactions against named
//! categories, tracks monthly spending limits with advisory alerts, produces
//! monthly summaries, and persists the whole ledger as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, transactions, spending limits)
//! - `ledger`: The in-memory ledger and its mutation rules
//! - `reports`: Monthly and per-category summaries
//! - `storage`: JSON document persistence
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::{Category, Transaction};
//! use finance_tracker::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let groceries = ledger.add_category(Category::expense("Groceries"));
//! ledger.set_spending_limit(groceries, 100.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
pub use ledger::Ledger;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// Logs go to stderr. `RUST_LOG` overrides the default `finance_tracker=warn`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_tracker=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
