//! Transaction display formatting
//!
//! Rows are numbered by their position in the ledger, which is what the
//! `transaction remove` and `transaction edit` commands take.

use super::report::format_amount;
use crate::config::Settings;
use crate::ledger::Ledger;
use crate::models::Transaction;

/// Format a single transaction as a table row
fn format_transaction_row(
    number: usize,
    txn: &Transaction,
    ledger: &Ledger,
    settings: &Settings,
) -> String {
    let category = ledger
        .category_name(txn.category_id)
        .unwrap_or("(uncategorized)");

    format!(
        "{:>4}  {:10}  {:24}  {:18}  {:>12}",
        number,
        txn.date.format(&settings.date_format),
        super::truncate(&txn.description, 24),
        super::truncate(category, 18),
        format_amount(&settings.currency_symbol, txn.signed_amount())
    )
}

/// Format a list of transactions
pub fn format_transaction_list(
    transactions: &[&Transaction],
    ledger: &Ledger,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:24}  {:18}  {:>12}\n",
        "#", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for txn in transactions {
        let number = ledger
            .transactions()
            .iter()
            .position(|t| t.id == txn.id)
            .map(|i| i + 1)
            .unwrap_or(0);
        output.push_str(&format_transaction_row(number, txn, ledger, settings));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    ledger: &Ledger,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(&settings.currency_symbol, txn.amount)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));

    match ledger.category_name(txn.category_id) {
        Some(name) => output.push_str(&format!("Category:    {}\n", name)),
        None => output.push_str("Category:    (uncategorized)\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    #[test]
    fn test_list_numbers_by_ledger_position() {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        for desc in ["Bread", "Milk"] {
            let category = ledger.category(groceries).unwrap();
            let txn = Transaction::in_category(desc, 3.5, date, category);
            ledger.add_transaction(txn);
        }

        let only_milk: Vec<&Transaction> = ledger
            .transactions()
            .iter()
            .filter(|t| t.description == "Milk")
            .collect();
        let output = format_transaction_list(&only_milk, &ledger, &Settings::default());

        assert!(output.contains("   2  2024-01-02  Milk"));
        assert!(output.contains("-$3.50"));
    }

    #[test]
    fn test_details_uncategorized() {
        let ledger = Ledger::new();
        let txn = Transaction::new(
            "Cash",
            20.0,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            crate::models::CategoryKind::Expense,
            None,
        );
        let output = format_transaction_details(&txn, &ledger, &Settings::default());
        assert!(output.contains("Category:    (uncategorized)"));
        assert!(output.contains("Type:        EXPENSE"));
    }
}
