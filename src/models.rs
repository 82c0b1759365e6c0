use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TallyError;

pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A single card transaction. Owned exclusively by the store; ids are
/// zero-based row indices within one import batch, not global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: usize,
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub card_member: String,
    pub account_number: String,
    pub business_id: Option<String>,
}

impl Transaction {
    /// Statement dates arrive either ISO (2025-01-15) or US-style
    /// (01/15/2025). Anything else never passes a timeframe filter.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
            .ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: String,
    pub confidence: f64,
}

/// One aggregate slice: a category (or Income/Expense) and its total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Timeframe
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    /// Inclusive lower bound for the reporting window. Month and year use
    /// calendar subtraction with end-of-month clamping, not fixed day counts.
    pub fn cutoff(self, today: NaiveDate) -> NaiveDate {
        match self {
            Timeframe::Week => today - chrono::Duration::days(7),
            Timeframe::Month => today
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
            Timeframe::Year => today
                .checked_sub_months(Months::new(12))
                .unwrap_or(NaiveDate::MIN),
        }
    }
}

impl std::str::FromStr for Timeframe {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Timeframe::Week),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(TallyError::InvalidTimeframe(other.to_string())),
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::Week => write!(f, "week"),
            Timeframe::Month => write!(f, "month"),
            Timeframe::Year => write!(f, "year"),
        }
    }
}

// ---------------------------------------------------------------------------
// Business filter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BusinessFilter {
    #[default]
    All,
    Business(String),
}

impl BusinessFilter {
    /// `all` (any case) means no filter; anything else is a business id.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("all") {
            BusinessFilter::All
        } else {
            BusinessFilter::Business(token.to_string())
        }
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            BusinessFilter::All => true,
            BusinessFilter::Business(id) => txn.business_id.as_deref() == Some(id.as_str()),
        }
    }
}

impl std::str::FromStr for BusinessFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BusinessFilter::from_token(s))
    }
}
