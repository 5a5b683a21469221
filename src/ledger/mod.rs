//! The ledger engine
//!
//! `Ledger` owns the transactions, categories and spending limits and applies
//! the mutation rules between them. Transactions and limits refer to
//! categories by handle; two handles refer to the same category when the
//! categories they resolve to share a (name, kind) key.
//!
//! Nothing in here fails. Lookup misses degrade to "no effect" or zero.

mod limits;
mod query;

pub use limits::{AlertLevel, LimitAlert, APPROACHING_RATIO};

use std::path::Path;

use crate::error::TrackerResult;
use crate::models::{Category, CategoryId, CategoryKey, SpendingLimit, Transaction, TransactionId};
use crate::storage::document;

/// In-memory store and rule engine for a personal ledger
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    spending_limits: Vec<SpendingLimit>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a ledger from already-linked collections
    pub(crate) fn from_parts(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        spending_limits: Vec<SpendingLimit>,
    ) -> Self {
        Self {
            transactions,
            categories,
            spending_limits,
        }
    }

    // === Accessors ===

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Spending limits in insertion order
    pub fn spending_limits(&self) -> &[SpendingLimit] {
        &self.spending_limits
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// First category with the given (name, kind)
    pub fn category_by_key(&self, key: &CategoryKey) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(key))
    }

    /// First category whose name matches, ignoring case
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        let name_lower = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == name_lower)
    }

    /// Resolve a category handle to its current name
    pub fn category_name(&self, id: Option<CategoryId>) -> Option<&str> {
        id.and_then(|id| self.category(id)).map(|c| c.name.as_str())
    }

    /// The limit attached to a category, if any
    pub fn spending_limit(&self, category_id: CategoryId) -> Option<&SpendingLimit> {
        self.spending_limits
            .iter()
            .find(|sl| self.same_category(sl.category_id, category_id))
    }

    /// Whether two handles denote the same category by value
    ///
    /// Handles that no longer resolve only match themselves.
    pub(crate) fn same_category(&self, a: CategoryId, b: CategoryId) -> bool {
        if a == b {
            return true;
        }
        match (self.category(a), self.category(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Every handle that denotes the same category as `id`, including `id`
    fn equivalent_ids(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut ids = vec![id];
        if let Some(target) = self.category(id) {
            ids.extend(
                self.categories
                    .iter()
                    .filter(|c| c.id != id && *c == target)
                    .map(|c| c.id),
            );
        }
        ids
    }

    // === Transaction Operations ===

    /// Append a transaction and charge it against its category's limit
    ///
    /// Only EXPENSE transactions touch limits, and no limit is created if the
    /// category has none. No validation is performed.
    pub fn add_transaction(&mut self, transaction: Transaction) -> TransactionId {
        let id = transaction.id;
        self.adjust_limit_for(&transaction, transaction.amount);
        tracing::debug!(
            transaction = %id,
            amount = transaction.amount,
            kind = %transaction.kind,
            "transaction added"
        );
        self.transactions.push(transaction);
        id
    }

    /// Remove a transaction and credit its amount back to the limit
    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);
        self.adjust_limit_for(&removed, -removed.amount);
        tracing::debug!(transaction = %id, "transaction removed");
        Some(removed)
    }

    /// Replace a transaction's fields in place, keeping its handle and position
    ///
    /// Limit bookkeeping runs as a removal of the old values followed by an
    /// addition of the new ones. Returns false if the transaction is unknown.
    pub fn update_transaction(&mut self, id: TransactionId, replacement: Transaction) -> bool {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            return false;
        };

        let old = self.transactions[index].clone();
        self.adjust_limit_for(&old, -old.amount);

        let updated = Transaction { id, ..replacement };
        self.adjust_limit_for(&updated, updated.amount);
        self.transactions[index] = updated;

        tracing::debug!(transaction = %id, "transaction updated");
        true
    }

    fn adjust_limit_for(&mut self, transaction: &Transaction, delta: f64) {
        if !transaction.is_expense() {
            return;
        }
        let Some(category_id) = transaction.category_id else {
            return;
        };

        let ids = self.equivalent_ids(category_id);
        for limit in self
            .spending_limits
            .iter_mut()
            .filter(|sl| ids.contains(&sl.category_id))
        {
            limit.current_spent += delta;
        }
    }

    // === Category Operations ===

    /// Append a category
    pub fn add_category(&mut self, category: Category) -> CategoryId {
        let id = category.id;
        tracing::debug!(category = %category.key(), "category added");
        self.categories.push(category);
        id
    }

    /// Rename a category in place
    ///
    /// Transactions and limits hold the handle, so they see the new name
    /// immediately. Returns false if the category is unknown.
    pub fn rename_category(&mut self, id: CategoryId, new_name: impl Into<String>) -> bool {
        let new_name = new_name.into();
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                tracing::debug!(from = %category.name, to = %new_name, "category renamed");
                category.name = new_name;
                true
            }
            None => false,
        }
    }

    /// Delete a category and everything that depends on it
    ///
    /// Every transaction referring to the category (by value) becomes
    /// uncategorized and every limit on it is removed.
    pub fn delete_category(&mut self, id: CategoryId) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;

        let ids = self.equivalent_ids(id);

        let mut cleared = 0;
        for transaction in self.transactions.iter_mut() {
            if transaction
                .category_id
                .is_some_and(|category_id| ids.contains(&category_id))
            {
                transaction.category_id = None;
                cleared += 1;
            }
        }

        let before = self.spending_limits.len();
        self.spending_limits.retain(|sl| !ids.contains(&sl.category_id));

        let removed = self.categories.remove(index);
        tracing::debug!(
            category = %removed.key(),
            transactions_cleared = cleared,
            limits_removed = before - self.spending_limits.len(),
            "category deleted"
        );
        Some(removed)
    }

    // === Persistence ===

    /// Write the ledger to a JSON document
    ///
    /// Failures are logged and returned; the in-memory ledger is unaffected.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        match document::save(self, path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "ledger saved");
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to save ledger");
                Err(e)
            }
        }
    }

    /// Replace this ledger's contents with a JSON document
    ///
    /// A missing or empty file yields an empty ledger. On failure the current
    /// contents are kept and the error is logged and returned.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> TrackerResult<()> {
        let path = path.as_ref();
        match document::load(path) {
            Ok(loaded) => {
                *self = loaded;
                tracing::info!(
                    path = %path.display(),
                    transactions = self.transactions.len(),
                    categories = self.categories.len(),
                    limits = self.spending_limits.len(),
                    "ledger loaded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load ledger");
                Err(e)
            }
        }
    }
}
