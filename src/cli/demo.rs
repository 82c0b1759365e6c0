use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::importer::import_into;
use crate::models::{Bucket, BusinessFilter, Timeframe};
use crate::recategorize::{apply_category, apply_proposal, propose_similar};
use crate::reports;
use crate::store::{TransactionPatch, TransactionStore};

fn sample_csv(today: NaiveDate) -> String {
    let d = |days: i64| (today - chrono::Duration::days(days)).format("%Y-%m-%d");
    format!(
        "Date,Reference,Description,Card Member,Account #,Amount\n\
         {},r1,AWS monthly bill,JANE DOE,-1001,142.80\n\
         {},r2,aws monthly bill,JANE DOE,-1001,139.20\n\
         {},r3,Facebook ads,JANE DOE,-1001,310.00\n\
         {},r4,Client payment,JANE DOE,-1001,-2500.00\n\
         {},r5,Coffee beans,JANE DOE,-1001,18.50\n",
        d(2),
        d(20),
        d(5),
        d(10),
        d(1),
    )
}

fn print_buckets(title: &str, buckets: &[Bucket]) {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Amount"]);
    for b in buckets {
        table.add_row(vec![Cell::new(&b.name), Cell::new(money(b.value))]);
    }
    println!("\n{title}\n{table}");
}

/// Walks the whole lifecycle on sample data: import, businesses, a category
/// edit with the similar-transaction flow, and the three reports.
pub async fn run() -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut store = TransactionStore::new();

    let count = import_into(&mut store, sample_csv(today).as_bytes())?;
    println!("Imported {count} sample transactions.");

    let consulting = store.add_business("Acme Consulting");
    let studio = store.add_business("Side Studio");
    store.update_transaction(0, TransactionPatch::business(&consulting.id))?;
    store.update_transaction(1, TransactionPatch::business(&consulting.id))?;
    store.update_transaction(2, TransactionPatch::business(&studio.id))?;
    println!(
        "Added businesses: {} ({}), {} ({})",
        consulting.name, consulting.id, studio.name, studio.id
    );

    // Categorize the AWS bill against the suggester's advice so the
    // similar-transaction flow has something to propose.
    apply_category(&mut store, 0, "Infrastructure")?;
    if let Some(proposal) = propose_similar(&store, 0, "Infrastructure").await? {
        println!(
            "Suggestion service disagreed; applying \"Infrastructure\" to {} similar transaction(s).",
            proposal.ids.len()
        );
        apply_proposal(&mut store, &proposal)?;
    }

    let all = BusinessFilter::All;
    print_buckets(
        "Expense Distribution (last month, all businesses)",
        &reports::expenses_by_category(store.transactions(), Timeframe::Month, &all, today),
    );
    print_buckets(
        "Income vs. Expenses (last month, all businesses)",
        &reports::income_vs_expense(store.transactions(), Timeframe::Month, &all, today),
    );

    let only_consulting = BusinessFilter::Business(consulting.id.clone());
    print_buckets(
        &format!("Expense Distribution (last month, {})", consulting.name),
        &reports::expenses_by_category(store.transactions(), Timeframe::Month, &only_consulting, today),
    );

    let s = reports::summary(store.transactions(), Timeframe::Month, &all, today);
    println!("\nTotal Expenses: {}", money(s.total_expenses));
    println!(
        "Largest Category: {} ({})",
        s.largest_category.name,
        money(s.largest_category.value)
    );
    println!("Number of Transactions: {}", s.transaction_count);
    println!("Transactions in window: {}", s.filtered_count);

    // Removing a business clears the assignment on its transactions.
    store.remove_business(&studio.id);
    let orphaned = store
        .transactions()
        .iter()
        .filter(|t| t.id == 2 && t.business_id.is_none())
        .count();
    println!(
        "\n{}",
        format!(
            "Removed {} — {orphaned} transaction(s) back to unassigned.",
            studio.name
        )
        .yellow()
    );

    Ok(())
}
