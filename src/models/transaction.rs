//! Transaction model
//!
//! A dated monetary movement. Amounts are non-negative; the kind decides
//! whether the amount counts as income or expense.

use chrono::NaiveDate;
use std::fmt;

use super::category::{Category, CategoryKind};
use super::ids::{CategoryId, TransactionId};

/// A financial transaction
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// In-memory handle
    pub id: TransactionId,

    pub description: String,

    /// Conventionally positive; the ledger does not check
    pub amount: f64,

    pub date: NaiveDate,

    /// Expected to match the category's kind, but not enforced here
    pub kind: CategoryKind,

    /// Category handle, `None` once the category has been deleted
    pub category_id: Option<CategoryId>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        kind: CategoryKind,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date,
            kind,
            category_id,
        }
    }

    /// Create a transaction whose kind is taken from its category
    pub fn in_category(
        description: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        category: &Category,
    ) -> Self {
        Self::new(description, amount, date, category.kind, Some(category.id))
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Amount with sign applied (negative for expenses)
    pub fn signed_amount(&self) -> f64 {
        if self.is_income() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Validate user input before it is handed to the ledger
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_finite() {
            return Err(TransactionValidationError::InvalidAmount(self.amount));
        }

        if self.amount <= 0.0 {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.category_id.is_none() {
            return Err(TransactionValidationError::MissingCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionValidationError {
    EmptyDescription,
    InvalidAmount(f64),
    NonPositiveAmount(f64),
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::InvalidAmount(amount) => write!(f, "Amount is not a number: {}", amount),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {:.2})", amount)
            }
            Self::MissingCategory => write!(f, "A category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_in_category_takes_kind() {
        let salary = Category::income("Salary");
        let txn = Transaction::in_category("Pay", 2000.0, test_date(), &salary);

        assert_eq!(txn.kind, CategoryKind::Income);
        assert_eq!(txn.category_id, Some(salary.id));
        assert!(txn.is_income());
    }

    #[test]
    fn test_signed_amount() {
        let groceries = Category::expense("Groceries");
        let txn = Transaction::in_category("Bread", 10.0, test_date(), &groceries);
        assert_eq!(txn.signed_amount(), -10.0);
        assert_eq!(txn.to_string(), "2024-01-15 Bread -10.00");
    }

    #[test]
    fn test_validation() {
        let groceries = Category::expense("Groceries");
        let mut txn = Transaction::in_category("Milk", 5.0, test_date(), &groceries);
        assert!(txn.validate().is_ok());

        txn.amount = 0.0;
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(0.0))
        );

        txn.amount = 5.0;
        txn.description = String::new();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );

        txn.description = "Milk".into();
        txn.category_id = None;
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::MissingCategory)
        );
    }
}
