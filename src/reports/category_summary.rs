//! Category Summary Report
//!
//! One row per category used in a month, with the category's limit and how
//! much of it the month's total represents.

use crate::ledger::Ledger;
use crate::models::{CategoryId, CategoryKind, YearMonth};

/// A row of the category summary
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummaryRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub kind: CategoryKind,
    /// Sum of the month's transactions in this category
    pub total: f64,
    /// The category's monthly limit, if one is set
    pub monthly_limit: Option<f64>,
    /// `total / limit * 100`, only for a positive limit
    pub usage_percent: Option<f64>,
}

/// Category Summary Report
#[derive(Debug, Clone)]
pub struct CategorySummaryReport {
    pub month: YearMonth,
    pub rows: Vec<CategorySummaryRow>,
}

impl CategorySummaryReport {
    /// Generate the report for a month
    ///
    /// Uncategorized transactions are left out. Rows appear in the order their
    /// category is first seen.
    pub fn generate(ledger: &Ledger, month: YearMonth) -> Self {
        let month_transactions =
            ledger.filter_transactions(Some(month.start_date()), Some(month.end_date()), None);

        let mut rows: Vec<CategorySummaryRow> = Vec::new();
        for txn in month_transactions {
            let Some(category) = txn.category_id.and_then(|id| ledger.category(id)) else {
                continue;
            };

            if let Some(row) = rows
                .iter_mut()
                .find(|r| r.category_name == category.name && r.kind == category.kind)
            {
                row.total += txn.amount;
                continue;
            }

            rows.push(CategorySummaryRow {
                category_id: category.id,
                category_name: category.name.clone(),
                kind: category.kind,
                total: txn.amount,
                monthly_limit: None,
                usage_percent: None,
            });
        }

        for row in &mut rows {
            if let Some(limit) = ledger.spending_limit(row.category_id) {
                row.monthly_limit = Some(limit.monthly_limit);
                if limit.monthly_limit > 0.0 {
                    row.usage_percent = Some(row.total / limit.monthly_limit * 100.0);
                }
            }
        }

        Self { month, rows }
    }

    /// Sum of all rows
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }
}
