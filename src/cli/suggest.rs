use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::confidence;
use crate::suggester::get_suggestions;

pub async fn run(description: &str, amount: f64) -> Result<()> {
    let suggestions = get_suggestions(description, amount).await;

    let mut table = Table::new();
    table.set_header(vec!["Category", "Confidence"]);
    for s in &suggestions {
        table.add_row(vec![Cell::new(&s.category), Cell::new(confidence(s.confidence))]);
    }
    println!("Suggestions for \"{description}\"\n{table}");
    Ok(())
}
