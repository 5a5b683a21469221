//! Category CLI commands

use clap::Subcommand;

use super::resolve_category;
use crate::display::format_category_list;
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::{Category, CategoryKey, CategoryKind};

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Category type: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: CategoryKind,
    },

    /// List all categories
    List,

    /// Rename a category
    Rename {
        /// Current category name
        category: String,
        /// New name
        new_name: String,
    },

    /// Delete a category (its transactions become uncategorized)
    Delete {
        /// Category name
        category: String,
    },
}

/// Handle a category command, returning whether the ledger changed
pub fn handle_category_command(ledger: &mut Ledger, cmd: CategoryCommands) -> TrackerResult<bool> {
    match cmd {
        CategoryCommands::Add { name, kind } => {
            let category = Category::new(name.trim(), kind);
            category
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            if ledger.category_by_key(&category.key()).is_some() {
                return Err(TrackerError::Duplicate {
                    entity_type: "Category",
                    identifier: category.key().to_string(),
                });
            }

            println!("Created category: {} ({})", category.name, category.kind);
            ledger.add_category(category);
            Ok(true)
        }

        CategoryCommands::List => {
            print!("{}", format_category_list(ledger));
            Ok(false)
        }

        CategoryCommands::Rename { category, new_name } => {
            let existing = resolve_category(ledger, &category)?;
            let (id, kind, old_name) = (existing.id, existing.kind, existing.name.clone());

            let renamed = Category::new(new_name.trim(), kind);
            renamed
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let key = CategoryKey::new(renamed.name.clone(), kind);
            if ledger.category_by_key(&key).is_some_and(|c| c.id != id) {
                return Err(TrackerError::Duplicate {
                    entity_type: "Category",
                    identifier: key.to_string(),
                });
            }

            ledger.rename_category(id, renamed.name.clone());
            println!("Renamed category: {} -> {}", old_name, renamed.name);
            Ok(true)
        }

        CategoryCommands::Delete { category } => {
            let id = resolve_category(ledger, &category)?.id;
            if let Some(deleted) = ledger.delete_category(id) {
                println!("Deleted category: {}", deleted.name);
            }
            Ok(true)
        }
    }
}
