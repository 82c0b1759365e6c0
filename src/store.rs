use crate::error::{Result, TallyError};
use crate::models::{Business, Transaction};

/// Partial update for a single transaction. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub card_member: Option<String>,
    pub account_number: Option<String>,
    pub business_id: Option<String>,
}

impl TransactionPatch {
    pub fn category(category: &str) -> Self {
        TransactionPatch {
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    pub fn business(business_id: &str) -> Self {
        TransactionPatch {
            business_id: Some(business_id.to_string()),
            ..Default::default()
        }
    }
}

/// In-memory collection of transactions and businesses. Explicitly owned —
/// callers construct their own instance and pass it down; there is no
/// process-wide state.
#[derive(Debug)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    businesses: Vec<Business>,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    pub fn new() -> Self {
        TransactionStore {
            transactions: Vec::new(),
            businesses: vec![Business {
                id: "default".to_string(),
                name: "Default Business".to_string(),
            }],
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn get(&self, id: usize) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Installs a new batch wholesale. There are no merge semantics: the
    /// previous batch is discarded in this single call.
    pub fn replace_transactions(&mut self, batch: Vec<Transaction>) {
        self.transactions = batch;
    }

    pub fn update_transaction(&mut self, id: usize, patch: TransactionPatch) -> Result<()> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TallyError::UnknownTransaction(id))?;
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(description) = patch.description {
            txn.description = description;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(category) = patch.category {
            txn.category = category;
        }
        if let Some(card_member) = patch.card_member {
            txn.card_member = card_member;
        }
        if let Some(account_number) = patch.account_number {
            txn.account_number = account_number;
        }
        if let Some(business_id) = patch.business_id {
            txn.business_id = Some(business_id);
        }
        Ok(())
    }

    pub fn add_business(&mut self, name: &str) -> Business {
        // Date-derived ids can collide within one millisecond; bump until free.
        let mut millis = chrono::Utc::now().timestamp_millis();
        while self.businesses.iter().any(|b| b.id == millis.to_string()) {
            millis += 1;
        }
        let business = Business {
            id: millis.to_string(),
            name: name.trim().to_string(),
        };
        self.businesses.push(business.clone());
        business
    }

    /// Removes a business and clears `business_id` on any transactions that
    /// referenced it. Removing an id that does not exist is a no-op.
    pub fn remove_business(&mut self, id: &str) {
        self.businesses.retain(|b| b.id != id);
        for txn in &mut self.transactions {
            if txn.business_id.as_deref() == Some(id) {
                txn.business_id = None;
            }
        }
    }
}
