//! Spending limit CLI commands

use clap::Subcommand;

use super::{parse_amount, resolve_category};
use crate::config::Settings;
use crate::display::{format_alerts, format_limit_list};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::Ledger;
use crate::models::YearMonth;

/// Spending limit subcommands
#[derive(Subcommand, Debug)]
pub enum LimitCommands {
    /// Set a category's monthly spending limit (resets its tracked spend)
    Set {
        /// Category name
        category: String,
        /// Monthly limit amount
        amount: String,
    },

    /// Remove a category's spending limit
    Remove {
        /// Category name
        category: String,
    },

    /// List spending limits with their tracked spend
    List,

    /// Recompute spend from a month's expenses and report alerts
    Check {
        /// Month to check (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a limit command, returning whether the ledger changed
pub fn handle_limit_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: LimitCommands,
) -> TrackerResult<bool> {
    match cmd {
        LimitCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(ledger, &category)?;
            if !category.kind.is_expense() {
                return Err(TrackerError::Validation(format!(
                    "Spending limits apply to expense categories only; '{}' is {}",
                    category.name, category.kind
                )));
            }
            let (id, name) = (category.id, category.name.clone());

            ledger.set_spending_limit(id, amount);
            println!(
                "Set spending limit for {}: {}",
                name,
                crate::display::format_amount(&settings.currency_symbol, amount)
            );
            Ok(true)
        }

        LimitCommands::Remove { category } => {
            let category = resolve_category(ledger, &category)?;
            let (id, name) = (category.id, category.name.clone());

            if !ledger.remove_spending_limit(id) {
                return Err(TrackerError::limit_not_found(name));
            }
            println!("Removed spending limit for {}", name);
            Ok(true)
        }

        LimitCommands::List => {
            print!("{}", format_limit_list(ledger, settings));
            Ok(false)
        }

        LimitCommands::Check { month } => {
            let current = YearMonth::current();
            let month = match month {
                Some(m) => m.parse::<YearMonth>().map_err(TrackerError::Validation)?,
                None => current,
            };

            // Tracked spend always follows the current month; other months
            // are reported without touching it.
            let recompute = month == current;
            let alerts = if recompute {
                ledger.check_spending_limits()
            } else {
                ledger.spending_alerts_for(month)
            };

            if alerts.is_empty() {
                println!("All spending limits OK for {}.", month);
            } else {
                print!("{}", format_alerts(&alerts, settings));
            }
            Ok(recompute)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction};
    use chrono::NaiveDate;

    #[test]
    fn test_set_then_remove() {
        let mut ledger = Ledger::new();
        ledger.add_category(Category::expense("Groceries"));
        let settings = Settings::default();

        let set = LimitCommands::Set {
            category: "Groceries".into(),
            amount: "200".into(),
        };
        handle_limit_command(&mut ledger, &settings, set).unwrap();
        assert_eq!(ledger.spending_limits()[0].monthly_limit, 200.0);

        let remove = || LimitCommands::Remove {
            category: "Groceries".into(),
        };
        handle_limit_command(&mut ledger, &settings, remove()).unwrap();
        assert!(ledger.spending_limits().is_empty());
        assert!(handle_limit_command(&mut ledger, &settings, remove())
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_set_rejects_income_category() {
        let mut ledger = Ledger::new();
        ledger.add_category(Category::income("Salary"));
        let set = LimitCommands::Set {
            category: "Salary".into(),
            amount: "500".into(),
        };
        assert!(handle_limit_command(&mut ledger, &Settings::default(), set)
            .unwrap_err()
            .is_validation());
        assert!(ledger.spending_limits().is_empty());
    }

    #[test]
    fn test_set_rejects_zero() {
        let mut ledger = Ledger::new();
        ledger.add_category(Category::expense("Groceries"));
        let set = LimitCommands::Set {
            category: "Groceries".into(),
            amount: "0".into(),
        };
        assert!(handle_limit_command(&mut ledger, &Settings::default(), set)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_check_other_month_reports_without_saving() {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        ledger.set_spending_limit(groceries, 100.0);
        let txn = Transaction::in_category(
            "Shop",
            500.0,
            NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            ledger.category(groceries).unwrap(),
        );
        ledger.add_transaction(txn);
        ledger.check_spending_limits();
        let settings = Settings::default();

        let check = LimitCommands::Check {
            month: Some("2023-01".into()),
        };
        assert!(!handle_limit_command(&mut ledger, &settings, check).unwrap());
        assert_eq!(ledger.spending_limits()[0].current_spent, 0.0);

        let snack = Transaction::in_category(
            "Snack",
            1.0,
            chrono::Local::now().date_naive(),
            ledger.category(groceries).unwrap(),
        );
        assert!(!ledger.would_exceed_limit(&snack));
    }

    #[test]
    fn test_check_current_month_recomputes() {
        let mut ledger = Ledger::new();
        let groceries = ledger.add_category(Category::expense("Groceries"));
        ledger.set_spending_limit(groceries, 100.0);
        let txn = Transaction::in_category(
            "Shop",
            90.0,
            chrono::Local::now().date_naive(),
            ledger.category(groceries).unwrap(),
        );
        ledger.add_transaction(txn);
        ledger.set_spending_limit(groceries, 100.0);
        assert_eq!(ledger.spending_limits()[0].current_spent, 0.0);

        let check = LimitCommands::Check { month: None };
        assert!(handle_limit_command(&mut ledger, &Settings::default(), check).unwrap());
        assert_eq!(ledger.spending_limits()[0].current_spent, 90.0);
    }

    #[test]
    fn test_check_rejects_bad_month() {
        let mut ledger = Ledger::new();
        let check = LimitCommands::Check {
            month: Some("March".into()),
        };
        assert!(handle_limit_command(&mut ledger, &Settings::default(), check)
            .unwrap_err()
            .is_validation());
    }
}
