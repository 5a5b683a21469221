//! Core data models for the finance tracker
//!
//! This module contains the data structures of the ledger domain:
//! categories, transactions, spending limits and calendar months.

pub mod category;
pub mod ids;
pub mod period;
pub mod spending_limit;
pub mod transaction;

pub use category::{Category, CategoryKey, CategoryKind, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use period::YearMonth;
pub use spending_limit::SpendingLimit;
pub use transaction::{Transaction, TransactionValidationError};
