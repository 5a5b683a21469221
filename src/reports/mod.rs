//! Reports module for the finance tracker
//!
//! Pure views over a ledger: the monthly income/expense summary and the
//! per-category breakdown with limit usage.

pub mod category_summary;
pub mod monthly;

pub use category_summary::{CategorySummaryReport, CategorySummaryRow};
pub use monthly::{CategoryTotal, MonthlySummary};
