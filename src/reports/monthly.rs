//! Monthly Summary
//!
//! Totals income and expenses for one calendar month and breaks the month's
//! transactions down by category.

use crate::ledger::Ledger;
use crate::models::{CategoryKey, YearMonth};

/// Summed amount for one category (or for uncategorized transactions)
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// `None` for transactions without a category
    pub category: Option<CategoryKey>,
    pub total: f64,
}

/// Monthly Summary
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub total_income: f64,
    pub total_expenses: f64,
    /// `total_income - total_expenses`
    pub net_balance: f64,
    /// Both income and expense categories, in first-seen order
    pub category_breakdown: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Generate the summary in a single pass over the ledger
    ///
    /// Every transaction in the month lands in the breakdown regardless of
    /// kind. Categories are grouped by (name, kind).
    pub fn generate(ledger: &Ledger, month: YearMonth) -> Self {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;
        let mut category_breakdown: Vec<CategoryTotal> = Vec::new();

        for txn in ledger
            .transactions()
            .iter()
            .filter(|t| month.contains(t.date))
        {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expenses += txn.amount;
            }

            let key = txn
                .category_id
                .and_then(|id| ledger.category(id))
                .map(|c| c.key());

            match category_breakdown.iter_mut().find(|e| e.category == key) {
                Some(entry) => entry.total += txn.amount,
                None => category_breakdown.push(CategoryTotal {
                    category: key,
                    total: txn.amount,
                }),
            }
        }

        Self {
            month,
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            category_breakdown,
        }
    }

    /// Total for a category key, zero if it had no transactions this month
    pub fn total_for(&self, key: &CategoryKey) -> f64 {
        self.category_breakdown
            .iter()
            .find(|e| e.category.as_ref() == Some(key))
            .map(|e| e.total)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.category_breakdown.is_empty()
    }
}
