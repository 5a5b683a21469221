//! Category model
//!
//! A category is a named INCOME or EXPENSE classification. Two categories
//! are the same category when their name and kind match; the handle only
//! exists so the ledger can resolve references without aliasing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Whether money flows in or out. Transactions reuse this for their own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl std::str::FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown category kind '{}' (expected income or expense)", other)),
        }
    }
}

/// The (name, kind) pair that identifies a category by value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryKey {
    pub name: String,
    pub kind: CategoryKind,
}

impl CategoryKey {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// A transaction category
#[derive(Debug, Clone)]
pub struct Category {
    /// In-memory handle
    pub id: CategoryId,

    /// Display name, renamable in place
    pub name: String,

    /// INCOME or EXPENSE
    pub kind: CategoryKind,
}

impl Category {
    /// Create a new category with a fresh handle
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
        }
    }

    pub fn income(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::Income)
    }

    pub fn expense(name: impl Into<String>) -> Self {
        Self::new(name, CategoryKind::Expense)
    }

    /// The value identity of this category
    pub fn key(&self) -> CategoryKey {
        CategoryKey::new(self.name.clone(), self.kind)
    }

    /// Cheap key comparison without allocating
    pub fn matches(&self, key: &CategoryKey) -> bool {
        self.kind == key.kind && self.name == key.name
    }

    /// Validate the category before it is handed to the ledger
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

/// Equality is by (name, kind), never by handle
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.name == other.name
    }
}

impl Eq for Category {}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
