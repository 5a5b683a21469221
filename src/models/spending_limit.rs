//! Spending limit model
//!
//! A monthly cap bound to one expense category. `current_spent` is a cached
//! aggregate maintained by the ledger, not derived on read.

use super::ids::CategoryId;

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingLimit {
    pub category_id: CategoryId,
    pub monthly_limit: f64,
    pub current_spent: f64,
}

impl SpendingLimit {
    /// Create a limit with nothing spent yet
    pub fn new(category_id: CategoryId, monthly_limit: f64) -> Self {
        Self::with_spent(category_id, monthly_limit, 0.0)
    }

    /// Restore a limit with a previously accumulated spend
    pub fn with_spent(category_id: CategoryId, monthly_limit: f64, current_spent: f64) -> Self {
        Self {
            category_id,
            monthly_limit,
            current_spent,
        }
    }

    /// Fraction of the limit used so far, `None` for a non-positive limit
    pub fn usage_ratio(&self) -> Option<f64> {
        if self.monthly_limit > 0.0 {
            Some(self.current_spent / self.monthly_limit)
        } else {
            None
        }
    }

    /// Amount left before the limit is reached (negative once exceeded)
    pub fn remaining(&self) -> f64 {
        self.monthly_limit - self.current_spent
    }
}
