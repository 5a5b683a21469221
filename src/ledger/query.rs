//! Read-only queries over the ledger

use chrono::NaiveDate;

use super::Ledger;
use crate::models::{CategoryId, Transaction, YearMonth};
use crate::reports::MonthlySummary;

impl Ledger {
    /// Transactions inside an inclusive date range and optional category
    ///
    /// Either bound may be omitted. With a category given, uncategorized
    /// transactions never match. Ledger order is preserved.
    pub fn filter_transactions(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category: Option<CategoryId>,
    ) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| start.map_or(true, |s| t.date >= s))
            .filter(|t| end.map_or(true, |e| t.date <= e))
            .filter(|t| match category {
                Some(wanted) => t
                    .category_id
                    .is_some_and(|id| self.same_category(id, wanted)),
                None => true,
            })
            .collect()
    }

    /// All-time income minus all-time expenses
    pub fn current_balance(&self) -> f64 {
        let (income, expenses) = self
            .transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), t| {
                if t.is_income() {
                    (income + t.amount, expenses)
                } else {
                    (income, expenses + t.amount)
                }
            });
        income - expenses
    }

    /// Income, expenses and per-category totals for one month
    pub fn monthly_summary(&self, month: YearMonth) -> MonthlySummary {
        MonthlySummary::generate(self, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (Ledger, CategoryId, CategoryId) {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        let books = ledger.add_category(Category::expense("Books"));

        for (desc, amount, d, cat) in [
            ("A", 10.0, date(2024, 1, 1), groceries),
            ("B", 20.0, date(2024, 2, 1), books),
            ("C", 30.0, date(2024, 1, 31), groceries),
            ("D", 40.0, date(2024, 3, 15), groceries),
        ] {
            let txn = Transaction::in_category(desc, amount, d, ledger.category(cat).unwrap());
            ledger.add_transaction(txn);
        }
        (ledger, groceries, books)
    }

    fn descriptions(txns: &[&Transaction]) -> Vec<String> {
        txns.iter().map(|t| t.description.clone()).collect()
    }

    #[test]
    fn test_filter_range_and_category() {
        let (ledger, groceries, _) = setup();
        let filtered = ledger.filter_transactions(
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 31)),
            Some(groceries),
        );
        assert_eq!(descriptions(&filtered), vec!["A", "C"]);
    }

    #[test]
    fn test_filter_start_only() {
        let (ledger, _, _) = setup();
        let filtered = ledger.filter_transactions(Some(date(2024, 1, 31)), None, None);
        assert_eq!(descriptions(&filtered), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_filter_end_only() {
        let (ledger, _, _) = setup();
        let filtered = ledger.filter_transactions(None, Some(date(2024, 1, 31)), None);
        assert_eq!(descriptions(&filtered), vec!["A", "C"]);
    }

    #[test]
    fn test_filter_no_criteria_returns_everything() {
        let (ledger, _, _) = setup();
        assert_eq!(ledger.filter_transactions(None, None, None).len(), 4);
    }

    #[test]
    fn test_filter_category_skips_uncategorized() {
        let (mut ledger, _, books) = setup();
        ledger.delete_category(books);
        let groceries = ledger.find_category("Groceries").unwrap().id;

        assert_eq!(ledger.filter_transactions(None, None, Some(groceries)).len(), 3);
        assert!(ledger.filter_transactions(None, None, Some(books)).is_empty());
    }

    #[test]
    fn test_balance_add_then_remove_is_inverse() {
        let (mut ledger, _, _) = setup();
        let salary = ledger.add_category(Category::income("Salary"));
        let before = ledger.current_balance();
        assert_eq!(before, -100.0);

        let category = ledger.category(salary).unwrap();
        let pay = Transaction::in_category("Pay", 2000.0, date(2024, 5, 1), category);
        let id = ledger.add_transaction(pay);
        assert_eq!(ledger.current_balance(), 1900.0);

        ledger.remove_transaction(id);
        assert_eq!(ledger.current_balance(), before);
    }
}
