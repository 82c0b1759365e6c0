pub mod categorize;
pub mod demo;
pub mod import;
pub mod report;
pub mod suggest;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Card-transaction expense tracker for multi-business owners."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a card-statement CSV and show what parsed.
    Import {
        /// Path to the CSV file
        file: String,
    },
    /// Ask the category suggestion service about a description and amount.
    Suggest {
        /// Transaction description, e.g. 'AWS hosting bill'
        description: String,
        /// Signed amount (positive = expense, negative = income)
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
    },
    /// Set a transaction's category, with optional bulk apply to similar rows.
    Categorize {
        /// Path to the CSV file
        file: String,
        /// Transaction id (zero-based row index from `tally import`)
        #[arg(long)]
        id: usize,
        /// Category to assign
        #[arg(long)]
        category: String,
        /// Apply the batch update to similar transactions without prompting
        #[arg(long = "apply-similar")]
        apply_similar: bool,
    },
    /// Generate aggregate reports over an imported CSV.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Walk the full workflow on generated sample data.
    Demo,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Expense distribution by category.
    Expenses {
        /// Path to the CSV file
        file: String,
        /// Reporting window: week, month, or year
        #[arg(long, default_value = "month")]
        timeframe: String,
        /// Business id to filter by, or 'all'
        #[arg(long, default_value = "all")]
        business: String,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Income vs. expense totals.
    IncomeExpense {
        file: String,
        #[arg(long, default_value = "month")]
        timeframe: String,
        #[arg(long, default_value = "all")]
        business: String,
        #[arg(long)]
        json: bool,
    },
    /// Summary statistics for the window.
    Summary {
        file: String,
        #[arg(long, default_value = "month")]
        timeframe: String,
        #[arg(long, default_value = "all")]
        business: String,
        #[arg(long)]
        json: bool,
    },
}
