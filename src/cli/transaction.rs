//! Transaction CLI commands
//!
//! Transactions are addressed by the row number shown in `transaction list`.

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount, parse_date, resolve_category, resolve_transaction};
use crate::config::Settings;
use crate::display::{format_alerts, format_transaction_details, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::Transaction;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "42" or "42.50"); the category decides income or expense
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Add even if the category's spending limit would be exceeded
        #[arg(long)]
        force: bool,
    },

    /// List transactions
    List {
        /// Start date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a transaction
    Remove {
        /// Row number from `transaction list`
        number: usize,
    },

    /// Edit a transaction
    Edit {
        /// Row number from `transaction list`
        number: usize,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
}

/// Handle a transaction command, returning whether the ledger changed
pub fn handle_transaction_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<bool> {
    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            date,
            force,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let category = resolve_category(ledger, &category)?;

            let txn = Transaction::in_category(description.trim(), amount, date, category);
            txn.validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            if ledger.would_exceed_limit(&txn) && !force {
                return Err(TrackerError::Validation(format!(
                    "Adding this transaction would exceed the spending limit for '{}'. \
                     Use --force to add it anyway",
                    category.name
                )));
            }

            println!("Added transaction: {}", txn.description);
            print!("{}", format_transaction_details(&txn, ledger, settings));
            ledger.add_transaction(txn);

            print!("{}", format_alerts(&ledger.check_spending_limits(), settings));
            Ok(true)
        }

        TransactionCommands::List { from, to, category } => {
            let start = from.as_deref().map(parse_date).transpose()?;
            let end = to.as_deref().map(parse_date).transpose()?;
            let category_id = match category {
                Some(name) => Some(resolve_category(ledger, &name)?.id),
                None => None,
            };

            let transactions = ledger.filter_transactions(start, end, category_id);
            print!("{}", format_transaction_list(&transactions, ledger, settings));
            Ok(false)
        }

        TransactionCommands::Remove { number } => {
            let id = resolve_transaction(ledger, number)?;
            if let Some(removed) = ledger.remove_transaction(id) {
                println!("Removed transaction #{}: {}", number, removed.description);
            }
            Ok(true)
        }

        TransactionCommands::Edit {
            number,
            description,
            amount,
            category,
            date,
        } => {
            let id = resolve_transaction(ledger, number)?;
            let mut edited = ledger
                .transaction(id)
                .cloned()
                .ok_or_else(|| TrackerError::transaction_not_found(format!("#{}", number)))?;

            if let Some(description) = description {
                edited.description = description.trim().to_string();
            }
            if let Some(amount) = amount {
                edited.amount = parse_amount(&amount)?;
            }
            if let Some(date) = date {
                edited.date = parse_date(&date)?;
            }
            if let Some(name) = category {
                let category = resolve_category(ledger, &name)?;
                edited.category_id = Some(category.id);
                edited.kind = category.kind;
            }

            edited
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            ledger.update_transaction(id, edited);
            println!("Updated transaction #{}", number);
            Ok(true)
        }
    }
}
