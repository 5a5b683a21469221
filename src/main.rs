use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_balance, handle_category_command, handle_limit_command, handle_summary,
    handle_transaction_command, CategoryCommands, LimitCommands, TransactionCommands,
};
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal income and expense tracker",
    long_about = "fintrack records income and expense transactions against categories, \
                  warns when monthly spending limits are approached or exceeded, \
                  and summarizes each month's totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Spending limit commands
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Show the income/expense summary for a month
    Summary {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show the all-time balance
    Balance,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    finance_tracker::init_tracing();

    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths, &settings)?;

    let mut ledger = storage.load_ledger()?;

    let mutated = match cli.command {
        Some(Commands::Category(cmd)) => handle_category_command(&mut ledger, cmd)?,
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut ledger, &settings, cmd)?
        }
        Some(Commands::Limit(cmd)) => handle_limit_command(&mut ledger, &settings, cmd)?,
        Some(Commands::Summary { month }) => {
            handle_summary(&ledger, &settings, month)?;
            false
        }
        Some(Commands::Balance) => {
            handle_balance(&ledger, &settings);
            false
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", storage.paths().base_dir().display());
            println!("Settings file:  {}", storage.paths().settings_file().display());
            println!("Data file:      {}", storage.data_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            false
        }
        None => {
            println!("fintrack - personal income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            false
        }
    };

    if mutated {
        storage.save_ledger(&ledger)?;
    }

    Ok(())
}
