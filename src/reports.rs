use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Bucket, BusinessFilter, Timeframe, Transaction};

// ---------------------------------------------------------------------------
// Window filter
// ---------------------------------------------------------------------------

/// Selects the transactions inside the reporting window: dated on or after
/// the timeframe cutoff (inclusive) and matching the business filter. Rows
/// with unparsable dates never qualify.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    timeframe: Timeframe,
    business: &BusinessFilter,
    today: NaiveDate,
) -> Vec<&'a Transaction> {
    let cutoff = timeframe.cutoff(today);
    transactions
        .iter()
        .filter(|t| {
            t.parsed_date().is_some_and(|d| d >= cutoff) && business.matches(t)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Expense distribution
// ---------------------------------------------------------------------------

/// Sums positive amounts per category over the filtered window. Buckets come
/// out in first-occurrence order, not sorted.
pub fn expenses_by_category(
    transactions: &[Transaction],
    timeframe: Timeframe,
    business: &BusinessFilter,
    today: NaiveDate,
) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for txn in filter_transactions(transactions, timeframe, business, today) {
        if txn.amount > 0.0 {
            match buckets.iter_mut().find(|b| b.name == txn.category) {
                Some(bucket) => bucket.value += txn.amount,
                None => buckets.push(Bucket {
                    name: txn.category.clone(),
                    value: txn.amount,
                }),
            }
        }
    }
    buckets
}

// ---------------------------------------------------------------------------
// Income vs. expense
// ---------------------------------------------------------------------------

/// Always exactly two buckets, fixed order. Negative amounts are income
/// (absolute value); everything else — NaN included — lands in Expense.
pub fn income_vs_expense(
    transactions: &[Transaction],
    timeframe: Timeframe,
    business: &BusinessFilter,
    today: NaiveDate,
) -> Vec<Bucket> {
    let mut income = 0.0f64;
    let mut expense = 0.0f64;
    for txn in filter_transactions(transactions, timeframe, business, today) {
        if txn.amount < 0.0 {
            income += txn.amount.abs();
        } else {
            expense += txn.amount;
        }
    }
    vec![
        Bucket {
            name: "Income".to_string(),
            value: income,
        },
        Bucket {
            name: "Expense".to_string(),
            value: expense,
        },
    ]
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_expenses: f64,
    pub largest_category: Bucket,
    /// Size of the full transaction list, ignoring timeframe and business
    /// filters. The filtered figure sits alongside so callers can show
    /// whichever reading they mean.
    pub transaction_count: usize,
    pub filtered_count: usize,
}

pub fn summary(
    transactions: &[Transaction],
    timeframe: Timeframe,
    business: &BusinessFilter,
    today: NaiveDate,
) -> Summary {
    let buckets = expenses_by_category(transactions, timeframe, business, today);
    let total_expenses: f64 = buckets.iter().map(|b| b.value).sum();
    // Strict comparison: ties keep the first-encountered bucket, and an
    // empty set keeps the sentinel.
    let largest_category = buckets.iter().fold(
        Bucket {
            name: "N/A".to_string(),
            value: 0.0,
        },
        |max, b| if b.value > max.value { b.clone() } else { max },
    );
    Summary {
        total_expenses,
        largest_category,
        transaction_count: transactions.len(),
        filtered_count: filter_transactions(transactions, timeframe, business, today).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_CATEGORY;

    const TODAY: &str = "2025-06-15";

    fn today() -> NaiveDate {
        TODAY.parse().unwrap()
    }

    fn txn(id: usize, date: &str, category: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            date: date.to_string(),
            description: format!("txn {id}"),
            amount,
            category: category.to_string(),
            card_member: String::new(),
            account_number: String::new(),
            business_id: None,
        }
    }

    fn biz_txn(id: usize, date: &str, amount: f64, business_id: &str) -> Transaction {
        Transaction {
            business_id: Some(business_id.to_string()),
            ..txn(id, date, DEFAULT_CATEGORY, amount)
        }
    }

    #[test]
    fn test_expenses_group_by_category_in_first_occurrence_order() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2025-06-11", "Travel", 40.0),
            txn(2, "2025-06-12", "Hosting", 25.0),
        ];
        let buckets = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], Bucket { name: "Hosting".into(), value: 125.0 });
        assert_eq!(buckets[1], Bucket { name: "Travel".into(), value: 40.0 });
    }

    #[test]
    fn test_negative_amounts_are_excluded_from_expense_buckets() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2025-06-11", "Hosting", -30.0),
        ];
        let buckets = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(buckets[0].value, 100.0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2025-06-11", "Travel", 40.0),
        ];
        let a = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        let b = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_cutoff_boundary_is_inclusive() {
        // Month cutoff from 2025-06-15 is exactly 2025-05-15.
        let txns = vec![
            txn(0, "2025-05-15", "Hosting", 10.0),
            txn(1, "2025-05-14", "Hosting", 99.0),
        ];
        let buckets = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].value, 10.0);
    }

    #[test]
    fn test_week_window_excludes_older_rows() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 10.0),
            txn(1, "2025-06-01", "Hosting", 99.0),
        ];
        let buckets = expenses_by_category(&txns, Timeframe::Week, &BusinessFilter::All, today());
        assert_eq!(buckets[0].value, 10.0);
    }

    #[test]
    fn test_unparsable_dates_never_aggregate() {
        let txns = vec![txn(0, "garbage", "Hosting", 10.0)];
        let buckets = expenses_by_category(&txns, Timeframe::Year, &BusinessFilter::All, today());
        assert!(buckets.is_empty());
    }

    #[test]
    fn test_business_filter_narrows_aggregates() {
        let txns = vec![
            biz_txn(0, "2025-06-10", 100.0, "b1"),
            biz_txn(1, "2025-06-11", 40.0, "b2"),
        ];
        let filter = BusinessFilter::Business("b1".to_string());
        let buckets = expenses_by_category(&txns, Timeframe::Month, &filter, today());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].value, 100.0);
    }

    #[test]
    fn test_business_filter_with_no_matches_yields_empty_aggregates() {
        let txns = vec![biz_txn(0, "2025-06-10", 100.0, "b1")];
        let filter = BusinessFilter::Business("ghost".to_string());
        let buckets = expenses_by_category(&txns, Timeframe::Month, &filter, today());
        assert!(buckets.is_empty());
        let ive = income_vs_expense(&txns, Timeframe::Month, &filter, today());
        assert_eq!(ive[0].value, 0.0);
        assert_eq!(ive[1].value, 0.0);
    }

    #[test]
    fn test_income_vs_expense_always_two_fixed_buckets() {
        let ive = income_vs_expense(&[], Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(ive.len(), 2);
        assert_eq!(ive[0], Bucket { name: "Income".into(), value: 0.0 });
        assert_eq!(ive[1], Bucket { name: "Expense".into(), value: 0.0 });
    }

    #[test]
    fn test_income_uses_absolute_values() {
        let txns = vec![
            txn(0, "2025-06-10", "Payroll", -1000.0),
            txn(1, "2025-06-11", "Hosting", 100.0),
            txn(2, "2025-06-12", "Hosting", 0.0),
        ];
        let ive = income_vs_expense(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(ive[0].value, 1000.0);
        assert_eq!(ive[1].value, 100.0);
    }

    #[test]
    fn test_nan_amount_poisons_the_expense_bucket() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", f64::NAN),
            txn(1, "2025-06-11", "Payroll", -500.0),
        ];
        let ive = income_vs_expense(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(ive[0].value, 500.0);
        assert!(ive[1].value.is_nan());
    }

    #[test]
    fn test_summary_total_matches_bucket_sum() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2025-06-11", "Travel", 40.0),
            txn(2, "2025-06-12", "Hosting", 25.0),
        ];
        let buckets = expenses_by_category(&txns, Timeframe::Month, &BusinessFilter::All, today());
        let s = summary(&txns, Timeframe::Month, &BusinessFilter::All, today());
        let bucket_sum: f64 = buckets.iter().map(|b| b.value).sum();
        assert_eq!(s.total_expenses, bucket_sum);
        assert_eq!(s.total_expenses, 165.0);
    }

    #[test]
    fn test_summary_largest_category_and_tie_break() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2025-06-11", "Travel", 100.0),
        ];
        let s = summary(&txns, Timeframe::Month, &BusinessFilter::All, today());
        // Equal values: the first-encountered bucket wins.
        assert_eq!(s.largest_category.name, "Hosting");
        assert_eq!(s.largest_category.value, 100.0);
    }

    #[test]
    fn test_summary_sentinel_on_empty_buckets() {
        let s = summary(&[], Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(s.largest_category.name, "N/A");
        assert_eq!(s.largest_category.value, 0.0);
        assert_eq!(s.total_expenses, 0.0);
    }

    #[test]
    fn test_summary_counts_both_interpretations() {
        let txns = vec![
            txn(0, "2025-06-10", "Hosting", 100.0),
            txn(1, "2020-01-01", "Travel", 40.0), // outside every window
        ];
        let s = summary(&txns, Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(s.transaction_count, 2); // full list, filters ignored
        assert_eq!(s.filtered_count, 1);
    }

    #[test]
    fn test_end_to_end_import_then_aggregate() {
        use crate::importer::import_into;
        use crate::store::TransactionStore;

        let csv = "\
Date,Reference,Description,Card Member,Account #,Amount
2025-06-10,r1,AWS bill,JANE,1001,100.00
2025-06-11,r2,Random,JANE,1001,50.00
2025-06-12,r3,Client payment,JANE,1001,-30.00
";
        let mut store = TransactionStore::new();
        import_into(&mut store, csv.as_bytes()).unwrap();

        // Nothing auto-categorizes on import: everything sits in
        // "Uncategorized" until a suggestion is applied.
        let buckets =
            expenses_by_category(store.transactions(), Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], Bucket { name: DEFAULT_CATEGORY.into(), value: 150.0 });

        let ive =
            income_vs_expense(store.transactions(), Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(ive[0], Bucket { name: "Income".into(), value: 30.0 });
        assert_eq!(ive[1], Bucket { name: "Expense".into(), value: 150.0 });

        let s = summary(store.transactions(), Timeframe::Month, &BusinessFilter::All, today());
        assert_eq!(s.total_expenses, 150.0);
        assert_eq!(s.transaction_count, 3);
    }
}
