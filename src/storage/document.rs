//! The on-disk ledger document
//!
//! Layout:
//!
//! ```json
//! {
//!   "transactions": [
//!     { "description": "Pay", "amount": 2000.0, "date": "2024-01-01",
//!       "kind": "INCOME", "category": { "name": "Salary", "kind": "INCOME" } }
//!   ],
//!   "categories": [ { "name": "Salary", "kind": "INCOME" } ],
//!   "spendingLimits": [
//!     { "category": { "name": "Groceries", "kind": "EXPENSE" },
//!       "monthlyLimit": 100.0, "currentSpent": 25.0 }
//!   ]
//! }
//! ```
//!
//! Each transaction and limit embeds a copy of its category. On load those
//! copies are relinked to the first entry of `categories` with the same
//! (name, kind), transactions first, then limits.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::file_io::{read_json, write_json_atomic};
use crate::error::TrackerResult;
use crate::ledger::Ledger;
use crate::models::{
    Category, CategoryId, CategoryKey, CategoryKind, SpendingLimit, Transaction,
};

/// A category as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCategory {
    pub name: String,
    #[serde(alias = "type")]
    pub kind: CategoryKind,
}

impl StoredCategory {
    fn key(&self) -> CategoryKey {
        CategoryKey::new(self.name.clone(), self.kind)
    }
}

impl From<&Category> for StoredCategory {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            kind: category.kind,
        }
    }
}

/// A transaction as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(alias = "type")]
    pub kind: CategoryKind,
    #[serde(default)]
    pub category: Option<StoredCategory>,
}

/// A spending limit as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLimit {
    #[serde(default)]
    pub category: Option<StoredCategory>,
    pub monthly_limit: f64,
    #[serde(default)]
    pub current_spent: f64,
}

/// The whole ledger document; any missing array reads as empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<StoredTransaction>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<StoredCategory>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spending_limits: Vec<StoredLimit>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl LedgerDocument {
    /// Snapshot a ledger, embedding each reference's current (name, kind)
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let embed = |id: Option<CategoryId>| {
            id.and_then(|id| ledger.category(id))
                .map(StoredCategory::from)
        };

        Self {
            transactions: ledger
                .transactions()
                .iter()
                .map(|t| StoredTransaction {
                    description: t.description.clone(),
                    amount: t.amount,
                    date: t.date,
                    kind: t.kind,
                    category: embed(t.category_id),
                })
                .collect(),
            categories: ledger
                .categories()
                .iter()
                .map(StoredCategory::from)
                .collect(),
            spending_limits: ledger
                .spending_limits()
                .iter()
                .map(|sl| StoredLimit {
                    category: embed(Some(sl.category_id)),
                    monthly_limit: sl.monthly_limit,
                    current_spent: sl.current_spent,
                })
                .collect(),
        }
    }

    /// Rebuild a ledger, relinking embedded categories to the canonical list
    ///
    /// An embedded category that matches nothing in `categories` is adopted:
    /// it is appended to the list and later references link to it, so no
    /// reference or limit is lost. A limit stored without any category has
    /// nothing to attach to and is skipped.
    pub fn into_ledger(self) -> Ledger {
        let mut categories: Vec<Category> = self
            .categories
            .into_iter()
            .map(|c| Category::new(c.name, c.kind))
            .collect();

        let transactions: Vec<Transaction> = self
            .transactions
            .into_iter()
            .map(|t| {
                let category_id = t
                    .category
                    .as_ref()
                    .map(|stored| relink(&mut categories, stored));
                Transaction::new(t.description, t.amount, t.date, t.kind, category_id)
            })
            .collect();

        let mut spending_limits: Vec<SpendingLimit> = Vec::new();
        for sl in self.spending_limits {
            let Some(stored) = sl.category.as_ref() else {
                tracing::warn!(
                    monthly_limit = sl.monthly_limit,
                    "spending limit without a category skipped"
                );
                continue;
            };
            let id = relink(&mut categories, stored);
            spending_limits.push(SpendingLimit::with_spent(
                id,
                sl.monthly_limit,
                sl.current_spent,
            ));
        }

        Ledger::from_parts(transactions, categories, spending_limits)
    }
}

/// First category with the stored (name, kind); adopts the stored copy if none
fn relink(categories: &mut Vec<Category>, stored: &StoredCategory) -> CategoryId {
    let key = stored.key();
    if let Some(existing) = categories.iter().find(|c| c.matches(&key)) {
        return existing.id;
    }

    tracing::warn!(
        category = %key,
        "embedded category not in category list, adding it"
    );
    let adopted = Category::new(stored.name.clone(), stored.kind);
    let id = adopted.id;
    categories.push(adopted);
    id
}

/// Serialize a ledger to `path`
pub fn save(ledger: &Ledger, path: &Path) -> TrackerResult<()> {
    write_json_atomic(path, &LedgerDocument::from_ledger(ledger))
}

/// Deserialize and relink a ledger from `path`
///
/// A missing, blank or `null` document yields an empty ledger.
pub fn load(path: &Path) -> TrackerResult<Ledger> {
    let document: Option<LedgerDocument> = read_json(path)?;
    Ok(document.unwrap_or_default().into_ledger())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        let salary = ledger.add_category(Category::income("Salary"));
        let books = ledger.add_category(Category::expense("Books"));
        ledger.set_spending_limit(groceries, 100.0);

        for (desc, amount, cat) in [
            ("Eggs", 25.0, groceries),
            ("Pay", 2000.0, salary),
            ("Book", 15.0, books),
        ] {
            let category = ledger.category(cat).unwrap();
            let txn = Transaction::in_category(desc, amount, date(2024, 1, 5), category);
            ledger.add_transaction(txn);
        }
        ledger
    }

    #[test]
    fn test_round_trip_preserves_counts_and_links() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance_data.json");
        let ledger = sample_ledger();

        save(&ledger, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.transactions().len(), 3);
        assert_eq!(loaded.categories().len(), 3);
        assert_eq!(loaded.spending_limits().len(), 1);

        for (before, after) in ledger.transactions().iter().zip(loaded.transactions()) {
            assert_eq!(before.description, after.description);
            assert_eq!(before.date, after.date);
            let before_cat = ledger.category(before.category_id.unwrap()).unwrap();
            let after_cat = loaded.category(after.category_id.unwrap()).unwrap();
            assert_eq!(before_cat, after_cat);
        }

        let limit = &loaded.spending_limits()[0];
        assert_eq!(limit.current_spent, 25.0);
        assert_eq!(loaded.category_name(Some(limit.category_id)), Some("Groceries"));
    }

    #[test]
    fn test_relinked_references_share_canonical_category() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance_data.json");
        save(&sample_ledger(), &path).unwrap();

        let mut loaded = load(&path).unwrap();
        let groceries = loaded.find_category("Groceries").unwrap().id;
        assert_eq!(loaded.transactions()[0].category_id, Some(groceries));
        assert_eq!(loaded.spending_limits()[0].category_id, groceries);

        loaded.rename_category(groceries, "Food");
        assert_eq!(loaded.category_name(loaded.transactions()[0].category_id), Some("Food"));
        assert_eq!(
            loaded.category_name(Some(loaded.spending_limits()[0].category_id)),
            Some("Food")
        );
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let json = serde_json::to_string(&LedgerDocument::from_ledger(&sample_ledger())).unwrap();
        assert!(json.contains("\"date\":\"2024-01-05\""));
        assert!(json.contains("\"spendingLimits\""));
        assert!(json.contains("\"monthlyLimit\":100.0"));
    }

    #[test]
    fn test_missing_and_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        assert!(load(&missing).unwrap().transactions().is_empty());

        let empty = temp_dir.path().join("empty.json");
        fs::write(&empty, "").unwrap();
        let ledger = load(&empty).unwrap();
        assert!(ledger.categories().is_empty());
        assert!(ledger.spending_limits().is_empty());

        let null = temp_dir.path().join("null.json");
        fs::write(&null, "null").unwrap();
        assert!(load(&null).unwrap().transactions().is_empty());
    }

    #[test]
    fn test_missing_array_reads_as_empty() {
        let json = r#"{
            "categories": [{"name": "Rent", "kind": "EXPENSE"}],
            "spendingLimits": null
        }"#;
        let document: LedgerDocument = serde_json::from_str(json).unwrap();
        let ledger = document.into_ledger();

        assert_eq!(ledger.categories().len(), 1);
        assert!(ledger.transactions().is_empty());
        assert!(ledger.spending_limits().is_empty());
    }

    #[test]
    fn test_reads_type_alias() {
        let json = r#"{
            "transactions": [{
                "description": "Pay", "amount": 100.0, "date": "2024-02-01",
                "type": "INCOME", "category": {"name": "Salary", "type": "INCOME"}
            }],
            "categories": [{"name": "Salary", "type": "INCOME"}]
        }"#;
        let ledger = serde_json::from_str::<LedgerDocument>(json).unwrap().into_ledger();
        let txn = &ledger.transactions()[0];
        assert!(txn.is_income());
        assert_eq!(ledger.category_name(txn.category_id), Some("Salary"));
    }

    #[test]
    fn test_unmatched_categories_are_adopted() {
        let json = r#"{
            "transactions": [{
                "description": "Lunch", "amount": 12.5, "date": "2024-02-01",
                "kind": "EXPENSE", "category": {"name": "Dining", "kind": "EXPENSE"}
            }],
            "categories": [],
            "spendingLimits": [{
                "category": {"name": "Dining", "kind": "EXPENSE"}, "monthlyLimit": 50.0,
                "currentSpent": 12.5
            }]
        }"#;
        let ledger = serde_json::from_str::<LedgerDocument>(json)
            .unwrap()
            .into_ledger();

        assert_eq!(ledger.categories().len(), 1);
        assert_eq!(ledger.spending_limits().len(), 1);
        let dining = ledger.categories()[0].id;
        assert_eq!(ledger.transactions()[0].category_id, Some(dining));
        assert_eq!(ledger.spending_limits()[0].category_id, dining);
        assert_eq!(ledger.spending_limits()[0].current_spent, 12.5);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finance_data.json");
        save(&ledger, &path).unwrap();
        let reloaded = load(&path).unwrap();

        assert_eq!(reloaded.spending_limits().len(), 1);
        let txn = &reloaded.transactions()[0];
        assert_eq!(reloaded.category_name(txn.category_id), Some("Dining"));
        assert_eq!(
            reloaded.category(txn.category_id.unwrap()).unwrap().kind,
            CategoryKind::Expense
        );
    }

    #[test]
    fn test_kind_mismatch_adopts_separate_category() {
        let json = r#"{
            "transactions": [{
                "description": "Tips", "amount": 5.0, "date": "2024-02-01",
                "kind": "EXPENSE", "category": {"name": "Dining", "kind": "EXPENSE"}
            }],
            "categories": [{"name": "Dining", "kind": "INCOME"}]
        }"#;
        let ledger = serde_json::from_str::<LedgerDocument>(json)
            .unwrap()
            .into_ledger();

        assert_eq!(ledger.categories().len(), 2);
        let linked = ledger.transactions()[0].category_id.unwrap();
        assert_eq!(linked, ledger.categories()[1].id);
        assert_eq!(ledger.category(linked).unwrap().kind, CategoryKind::Expense);
    }

    #[test]
    fn test_limit_without_category_is_skipped() {
        let json = r#"{"spendingLimits": [{"category": null, "monthlyLimit": 50.0}]}"#;
        let ledger = serde_json::from_str::<LedgerDocument>(json)
            .unwrap()
            .into_ledger();
        assert!(ledger.spending_limits().is_empty());
    }

    #[test]
    fn test_first_match_wins() {
        let json = r#"{
            "transactions": [{
                "description": "Rent", "amount": 900.0, "date": "2024-02-01",
                "kind": "EXPENSE", "category": {"name": "Housing", "kind": "EXPENSE"}
            }],
            "categories": [
                {"name": "Housing", "kind": "EXPENSE"},
                {"name": "Housing", "kind": "EXPENSE"}
            ]
        }"#;
        let ledger = serde_json::from_str::<LedgerDocument>(json).unwrap().into_ledger();
        assert_eq!(
            ledger.transactions()[0].category_id,
            Some(ledger.categories()[0].id)
        );
    }

    #[test]
    fn test_invalid_document_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{\"transactions\": 5}").unwrap();
        assert!(load(&path).is_err());
    }
}
