use crate::error::Result;
use crate::importer::import_into;
use crate::store::TransactionStore;

pub fn run(file: &str) -> Result<()> {
    let data = std::fs::read(file)?;
    let mut store = TransactionStore::new();
    let count = import_into(&mut store, &data)?;

    println!("{count} transactions imported");

    let dates: Vec<&str> = store
        .transactions()
        .iter()
        .filter(|t| t.parsed_date().is_some())
        .map(|t| t.date.as_str())
        .collect();
    if let (Some(min), Some(max)) = (dates.iter().min(), dates.iter().max()) {
        println!("Date range: {min} to {max}");
    }

    let nan_count = store
        .transactions()
        .iter()
        .filter(|t| t.amount.is_nan())
        .count();
    if nan_count > 0 {
        println!("{nan_count} row(s) had unparsable amounts (kept as not-a-number)");
    }

    Ok(())
}
