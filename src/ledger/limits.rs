//! Spending limit bookkeeping
//!
//! Two paths keep `current_spent` up to date and they are allowed to
//! disagree: `add_transaction`/`remove_transaction` adjust it incrementally
//! regardless of month, while `check_spending_limits` recomputes it from the
//! current month's expenses only.

use std::collections::HashMap;
use std::fmt;

use super::Ledger;
use crate::models::{CategoryId, CategoryKey, SpendingLimit, Transaction, YearMonth};

/// Share of a limit at which an "approaching" alert is raised
pub const APPROACHING_RATIO: f64 = 0.8;

/// Severity of a limit alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// At least 80% of the limit has been spent
    Approaching,
    /// The limit has been reached or passed
    Exceeded,
}

impl AlertLevel {
    /// Classify spend against a limit; `None` below the threshold or for a non-positive limit
    pub fn classify(spent: f64, limit: f64) -> Option<Self> {
        if limit <= 0.0 {
            None
        } else if spent >= limit {
            Some(Self::Exceeded)
        } else if spent >= APPROACHING_RATIO * limit {
            Some(Self::Approaching)
        } else {
            None
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approaching => write!(f, "APPROACHING LIMIT"),
            Self::Exceeded => write!(f, "LIMIT EXCEEDED"),
        }
    }
}

/// An advisory notification about a category's spending
#[derive(Debug, Clone, PartialEq)]
pub struct LimitAlert {
    pub category_id: CategoryId,
    /// Name at the time of the check, empty if the category no longer resolves
    pub category_name: String,
    pub spent: f64,
    pub limit: f64,
    pub level: AlertLevel,
}

impl fmt::Display for LimitAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({:.2}/{:.2})",
            self.level, self.category_name, self.spent, self.limit
        )
    }
}

impl Ledger {
    /// Set a category's monthly limit, resetting its accumulated spend
    ///
    /// Any existing limit for the category is dropped first. A limit of zero
    /// or less means "no limit" and nothing is re-inserted. Historical
    /// transactions are not re-counted.
    pub fn set_spending_limit(&mut self, category_id: CategoryId, limit: f64) {
        self.remove_spending_limit(category_id);

        if limit > 0.0 {
            self.spending_limits.push(SpendingLimit::new(category_id, limit));
            tracing::debug!(category = %category_id, limit, "spending limit set");
        }
    }

    /// Remove any limit on a category. Returns true if one was removed.
    pub fn remove_spending_limit(&mut self, category_id: CategoryId) -> bool {
        let ids = self.equivalent_ids(category_id);
        let before = self.spending_limits.len();
        self.spending_limits.retain(|sl| !ids.contains(&sl.category_id));
        before != self.spending_limits.len()
    }

    /// Recompute every limit from the current month and report alerts
    pub fn check_spending_limits(&mut self) -> Vec<LimitAlert> {
        self.check_spending_limits_at(YearMonth::current())
    }

    /// Recompute every limit from `month`'s expenses and report alerts
    ///
    /// Overwrites `current_spent` on every limit (zero when the category had
    /// no expenses), discarding whatever the incremental path accumulated.
    pub fn check_spending_limits_at(&mut self, month: YearMonth) -> Vec<LimitAlert> {
        let spent = self.month_spend_per_limit(month);
        for (limit, spent) in self.spending_limits.iter_mut().zip(&spent) {
            limit.current_spent = *spent;
        }

        let alerts = self.classify_limits(&spent);
        for alert in &alerts {
            tracing::warn!(
                category = %alert.category_name,
                spent = alert.spent,
                limit = alert.limit,
                severity = %alert.level,
                "spending limit alert"
            );
        }
        alerts
    }

    /// Alerts `month`'s expenses would raise, leaving every limit untouched
    pub fn spending_alerts_for(&self, month: YearMonth) -> Vec<LimitAlert> {
        self.classify_limits(&self.month_spend_per_limit(month))
    }

    /// `month`'s expense total for each limit, in limit order
    fn month_spend_per_limit(&self, month: YearMonth) -> Vec<f64> {
        let mut monthly_expenses: HashMap<CategoryKey, f64> = HashMap::new();
        for transaction in self
            .transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            let Some(category) = transaction.category_id.and_then(|id| self.category(id)) else {
                continue;
            };
            *monthly_expenses.entry(category.key()).or_insert(0.0) += transaction.amount;
        }

        self.spending_limits
            .iter()
            .map(|sl| {
                self.category(sl.category_id)
                    .and_then(|c| monthly_expenses.get(&c.key()))
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect()
    }

    fn classify_limits(&self, spent: &[f64]) -> Vec<LimitAlert> {
        self.spending_limits
            .iter()
            .zip(spent)
            .filter_map(|(limit, &spent)| {
                let level = AlertLevel::classify(spent, limit.monthly_limit)?;
                Some(LimitAlert {
                    category_id: limit.category_id,
                    category_name: self
                        .category_name(Some(limit.category_id))
                        .unwrap_or_default()
                        .to_string(),
                    spent,
                    limit: limit.monthly_limit,
                    level,
                })
            })
            .collect()
    }

    /// Alert for one category based on its cached spend, without recomputing
    pub fn alert_for(&self, category_id: CategoryId) -> Option<LimitAlert> {
        let limit = self.spending_limit(category_id)?;
        let level = AlertLevel::classify(limit.current_spent, limit.monthly_limit)?;
        Some(LimitAlert {
            category_id: limit.category_id,
            category_name: self
                .category_name(Some(limit.category_id))
                .unwrap_or_default()
                .to_string(),
            spent: limit.current_spent,
            limit: limit.monthly_limit,
            level,
        })
    }

    /// Whether adding `transaction` would push its category past the limit
    ///
    /// Uses the cached spend. Income and uncategorized transactions never do.
    pub fn would_exceed_limit(&self, transaction: &Transaction) -> bool {
        if !transaction.is_expense() {
            return false;
        }
        let Some(category_id) = transaction.category_id else {
            return false;
        };

        self.spending_limits
            .iter()
            .filter(|sl| self.same_category(sl.category_id, category_id))
            .any(|sl| {
                sl.monthly_limit > 0.0 && sl.current_spent + transaction.amount > sl.monthly_limit
            })
    }
}
