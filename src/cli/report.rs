use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::importer::import_into;
use crate::models::{BusinessFilter, Timeframe, Transaction};
use crate::reports;
use crate::store::TransactionStore;

struct ReportInput {
    store: TransactionStore,
    timeframe: Timeframe,
    business: BusinessFilter,
    today: NaiveDate,
}

impl ReportInput {
    fn load(file: &str, timeframe: &str, business: &str) -> Result<Self> {
        let timeframe: Timeframe = timeframe.parse()?;
        let business = BusinessFilter::from_token(business);
        let data = std::fs::read(file)?;
        let mut store = TransactionStore::new();
        import_into(&mut store, &data)?;
        Ok(ReportInput {
            store,
            timeframe,
            business,
            today: chrono::Local::now().date_naive(),
        })
    }

    fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }
}

pub fn expenses(file: &str, timeframe: &str, business: &str, json: bool) -> Result<()> {
    let input = ReportInput::load(file, timeframe, business)?;
    let buckets = reports::expenses_by_category(
        input.transactions(),
        input.timeframe,
        &input.business,
        input.today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount"]);
    let total: f64 = buckets.iter().map(|b| b.value).sum();
    for bucket in &buckets {
        table.add_row(vec![Cell::new(&bucket.name), Cell::new(money(bucket.value))]);
    }
    table.add_row(vec![Cell::new("Total".bold()), Cell::new(money(total))]);
    println!("Expense Distribution (last {})\n{table}", input.timeframe);
    Ok(())
}

pub fn income_expense(file: &str, timeframe: &str, business: &str, json: bool) -> Result<()> {
    let input = ReportInput::load(file, timeframe, business)?;
    let buckets = reports::income_vs_expense(
        input.transactions(),
        input.timeframe,
        &input.business,
        input.today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["", "Amount"]);
    table.add_row(vec![
        Cell::new("Income".green().bold()),
        Cell::new(money(buckets[0].value)),
    ]);
    table.add_row(vec![
        Cell::new("Expense".red().bold()),
        Cell::new(money(buckets[1].value)),
    ]);
    println!("Income vs. Expenses (last {})\n{table}", input.timeframe);
    Ok(())
}

pub fn summary(file: &str, timeframe: &str, business: &str, json: bool) -> Result<()> {
    let input = ReportInput::load(file, timeframe, business)?;
    let s = reports::summary(
        input.transactions(),
        input.timeframe,
        &input.business,
        input.today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&s)?);
        return Ok(());
    }

    println!("Summary (last {})", input.timeframe);
    println!("Total Expenses: {}", money(s.total_expenses));
    println!(
        "Largest Category: {} ({})",
        s.largest_category.name,
        money(s.largest_category.value)
    );
    println!("Number of Transactions: {}", s.transaction_count);
    println!("Transactions in window: {}", s.filtered_count);
    Ok(())
}
