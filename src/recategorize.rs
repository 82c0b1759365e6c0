use crate::error::{Result, TallyError};
use crate::store::{TransactionPatch, TransactionStore};
use crate::suggester;

/// A batch re-category candidate set awaiting explicit confirmation.
/// Applied all-or-none; no ordering guarantee among the ids.
#[derive(Debug, Clone, PartialEq)]
pub struct RecategorizeProposal {
    pub ids: Vec<usize>,
    pub category: String,
}

/// Phase 1 of a category edit: the direct edit, applied synchronously and
/// unconditionally. Never waits on the suggestion service.
pub fn apply_category(store: &mut TransactionStore, id: usize, category: &str) -> Result<()> {
    store.update_transaction(id, TransactionPatch::category(category))
}

/// Phase 2, independent of phase 1: asks the suggestion service about the
/// edited transaction, and when the service disagrees with the chosen
/// category, collects every *other* transaction whose description contains
/// the edited one's as a case-insensitive substring and whose category still
/// differs. Returns `None` when the service agrees or nothing matches.
/// Abandoning the proposal leaves the phase-1 edit intact.
pub async fn propose_similar(
    store: &TransactionStore,
    id: usize,
    category: &str,
) -> Result<Option<RecategorizeProposal>> {
    let txn = store.get(id).ok_or(TallyError::UnknownTransaction(id))?;
    let needle = txn.description.to_lowercase();

    let suggestions = suggester::get_suggestions(&txn.description, txn.amount).await;
    let top = match suggestions.first() {
        Some(s) => &s.category,
        None => return Ok(None),
    };
    if top == category {
        return Ok(None);
    }

    let ids: Vec<usize> = store
        .transactions()
        .iter()
        .filter(|t| {
            t.id != id
                && t.category != category
                && t.description.to_lowercase().contains(&needle)
        })
        .map(|t| t.id)
        .collect();

    if ids.is_empty() {
        Ok(None)
    } else {
        Ok(Some(RecategorizeProposal {
            ids,
            category: category.to_string(),
        }))
    }
}

/// Applies a confirmed proposal in one update.
pub fn apply_proposal(store: &mut TransactionStore, proposal: &RecategorizeProposal) -> Result<()> {
    for &id in &proposal.ids {
        store.update_transaction(id, TransactionPatch::category(&proposal.category))?;
    }
    Ok(())
}
