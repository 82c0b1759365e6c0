use crate::error::Result;
use crate::models::{Transaction, DEFAULT_CATEGORY};
use crate::store::TransactionStore;

// Fixed card-statement column layout. Column 1 is unused filler on these
// statements (a reference number).
const COL_DATE: usize = 0;
const COL_DESCRIPTION: usize = 2;
const COL_CARD_MEMBER: usize = 3;
const COL_ACCOUNT_NUMBER: usize = 4;
const COL_AMOUNT: usize = 5;

/// Parses an amount field. Strips currency noise the way statements write it
/// ($, thousands commas, stray quotes); anything still non-numeric yields NaN
/// rather than an error — the caller's aggregates must cope.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    s.trim().parse().unwrap_or(f64::NAN)
}

/// Parses raw CSV bytes into an ordered transaction batch.
///
/// The first row is a header and is discarded. Remaining rows map by fixed
/// position; short rows yield empty fields. Ids are the zero-based data-row
/// index — unique within this batch only. Every record starts out
/// `"Uncategorized"` with no business assigned.
pub fn parse_transactions(data: &[u8]) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut batch = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        if row == 0 {
            continue; // header
        }
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        batch.push(Transaction {
            id: batch.len(),
            date: field(COL_DATE),
            description: field(COL_DESCRIPTION),
            card_member: field(COL_CARD_MEMBER),
            account_number: field(COL_ACCOUNT_NUMBER),
            amount: parse_amount(&field(COL_AMOUNT)),
            category: DEFAULT_CATEGORY.to_string(),
            business_id: None,
        });
    }
    Ok(batch)
}

/// Parses and installs a batch in one shot. The replace is all-or-nothing:
/// a parse failure propagates before the store is touched, leaving the
/// previous batch standing.
pub fn import_into(store: &mut TransactionStore, data: &[u8]) -> Result<usize> {
    let batch = parse_transactions(data)?;
    let count = batch.len();
    store.replace_transactions(batch);
    Ok(count)
}
