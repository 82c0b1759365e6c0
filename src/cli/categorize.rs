use colored::Colorize;

use crate::error::Result;
use crate::importer::import_into;
use crate::recategorize::{apply_category, apply_proposal, propose_similar};
use crate::store::TransactionStore;

pub async fn run(file: &str, id: usize, category: &str, apply_similar: bool) -> Result<()> {
    let data = std::fs::read(file)?;
    let mut store = TransactionStore::new();
    import_into(&mut store, &data)?;

    // The direct edit always lands, whatever the suggestion flow decides.
    apply_category(&mut store, id, category)?;
    let description = store.get(id).map(|t| t.description.clone()).unwrap_or_default();
    println!("Transaction {id} (\"{description}\") set to \"{category}\"");

    match propose_similar(&store, id, category).await? {
        None => println!("No similar transactions to update."),
        Some(proposal) => {
            println!(
                "{} similar transaction(s) still carry a different category:",
                proposal.ids.len()
            );
            for pid in &proposal.ids {
                if let Some(t) = store.get(*pid) {
                    println!("  [{}] {} ({})", t.id, t.description, t.category);
                }
            }
            if apply_similar {
                apply_proposal(&mut store, &proposal)?;
                println!(
                    "{}",
                    format!("Updated {} transaction(s) to \"{category}\"", proposal.ids.len())
                        .green()
                );
            } else {
                println!("Re-run with --apply-similar to update them all.");
            }
        }
    }

    Ok(())
}
