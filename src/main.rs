mod cli;
mod error;
mod fmt;
mod importer;
mod models;
mod recategorize;
mod reports;
mod store;
mod suggester;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Import { file } => cli::import::run(&file),
        Commands::Suggest {
            description,
            amount,
        } => cli::suggest::run(&description, amount).await,
        Commands::Categorize {
            file,
            id,
            category,
            apply_similar,
        } => cli::categorize::run(&file, id, &category, apply_similar).await,
        Commands::Report { command } => match command {
            ReportCommands::Expenses {
                file,
                timeframe,
                business,
                json,
            } => cli::report::expenses(&file, &timeframe, &business, json),
            ReportCommands::IncomeExpense {
                file,
                timeframe,
                business,
                json,
            } => cli::report::income_expense(&file, &timeframe, &business, json),
            ReportCommands::Summary {
                file,
                timeframe,
                business,
                json,
            } => cli::report::summary(&file, &timeframe, &business, json),
        },
        Commands::Demo => cli::demo::run().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
