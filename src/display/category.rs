//! Category display formatting

use crate::ledger::Ledger;

/// Format the ledger's categories as a numbered table
pub fn format_category_list(ledger: &Ledger) -> String {
    let categories = ledger.categories();
    if categories.is_empty() {
        return "No categories found.\n\n\
                Run 'fintrack category add <name> --kind expense' to create one.\n"
            .to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<width$}  {:<8}  {}\n",
        "#",
        "Category",
        "Kind",
        "Limit",
        width = name_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<width$}  {:-<8}  {:-<10}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (i, category) in categories.iter().enumerate() {
        let limit = ledger
            .spending_limit(category.id)
            .map(|sl| format!("{:.2}", sl.monthly_limit))
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:>3}  {:<width$}  {:<8}  {}\n",
            i + 1,
            category.name,
            category.kind.to_string(),
            limit,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_empty_list() {
        let ledger = Ledger::new();
        assert!(format_category_list(&ledger).starts_with("No categories found."));
    }

    #[test]
    fn test_list_shows_limits() {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        ledger.add_category(Category::income("Salary"));
        ledger.set_spending_limit(groceries, 250.0);

        let output = format_category_list(&ledger);
        assert!(output.contains("Groceries"));
        assert!(output.contains("EXPENSE"));
        assert!(output.contains("250.00"));
        assert!(output.contains("Salary"));
    }
}
