//! Dataset expansion with a curated, compiled-in batch of traditions.
//!
//! The batch covers meditation lineages, psychedelic-assisted therapies,
//! psychotherapies, somatic and breathwork practices, relational practices
//! and contemplative paths. Expansion only ever appends: existing records
//! are left untouched and in place.

use std::collections::HashSet;

use crate::dataset::{DatasetError, Tradition, TraditionsDocument};

/// Raw JSON of the built-in batch.
pub const BUILTIN_BATCH_JSON: &str = include_str!("../../data/expansion_batch.json");

/// Result of merging a batch into a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOutcome {
    /// Ids appended, in batch order.
    pub added: Vec<String>,
    /// Ids already present and therefore left alone.
    pub skipped: Vec<String>,
}

/// Parse the built-in batch.
pub fn builtin_batch() -> Result<Vec<Tradition>, DatasetError> {
    serde_json::from_str(BUILTIN_BATCH_JSON).map_err(|e| DatasetError::EmbeddedBatch(e.to_string()))
}

/// Append every batch record whose id is not yet in `doc`.
pub fn expand(doc: &mut TraditionsDocument, batch: Vec<Tradition>) -> ExpandOutcome {
    let mut known: HashSet<String> = doc.traditions.iter().map(|t| t.id.clone()).collect();
    let mut outcome = ExpandOutcome::default();

    for tradition in batch {
        if known.insert(tradition.id.clone()) {
            outcome.added.push(tradition.id.clone());
            doc.traditions.push(tradition);
        } else {
            tracing::warn!(id = %tradition.id, "Tradition already present, skipping");
            outcome.skipped.push(tradition.id);
        }
    }

    tracing::info!(
        added = outcome.added.len(),
        skipped = outcome.skipped.len(),
        total = doc.traditions.len(),
        "Expanded traditions"
    );
    outcome
}
