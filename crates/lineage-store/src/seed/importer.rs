//! Seed importer orchestration
//!
//! Replays seed events into a fresh `FamilyTree`

use std::path::Path;

use lineage_core::{apply, FamilyTree};

use crate::errors::{event_rejected, Result};
use crate::seed::digest::compute_seed_digest;
use crate::seed::parser::{parse_seed_file, parse_seed_str, Seed, SeedFormat};

/// A tree built from a seed
#[derive(Debug, Clone)]
pub struct ImportedTree {
    pub tree: FamilyTree,

    /// Digest of the seed's events
    pub digest: String,

    /// Number of events in the seed, including skipped ones
    pub event_count: usize,

    /// Indexes of events the tree rejected and the import skipped
    pub skipped: Vec<usize>,

    pub family_name: Option<String>,
}

/// Import a seed file
///
/// This is the main entry point for seed import. It:
/// 1. Parses and validates the seed in the format its extension names
/// 2. Computes the seed digest
/// 3. Applies every event to an empty tree, in order
///
/// # Errors
/// Parse and validation errors, or a rejected root event.
pub fn import_seed(path: &Path) -> Result<ImportedTree> {
    let seed = parse_seed_file(path)?;
    import_parsed(seed)
}

/// Import a seed held in memory
///
/// # Errors
/// Same as `import_seed`.
pub fn import_seed_str(content: &str, format: SeedFormat) -> Result<ImportedTree> {
    let seed = parse_seed_str(content, format)?;
    import_parsed(seed)
}

/// Import an already parsed seed
///
/// A birth or marriage the tree rejects is skipped and recorded in
/// `skipped`; the remaining events still apply. Without a root nothing can
/// apply, so a rejected first event aborts the import.
///
/// # Errors
/// `InvalidInput` wrapping the domain error of a rejected root event.
pub fn import_parsed(seed: Seed) -> Result<ImportedTree> {
    let digest = compute_seed_digest(&seed)?;
    let event_count = seed.events.len();
    tracing::debug!(event_count, digest = %digest, "importing seed");

    let mut tree = FamilyTree::new();
    let mut skipped = Vec::new();
    for (index, event) in seed.events.into_iter().enumerate() {
        let op = event.op_name();
        if let Err(err) = apply(&mut tree, event) {
            tracing::debug!(index, op, error = %err, "seed event rejected");
            if tree.is_empty() {
                return Err(event_rejected(index, err));
            }
            skipped.push(index);
        }
    }

    Ok(ImportedTree {
        tree,
        digest,
        event_count,
        skipped,
        family_name: seed.family_name,
    })
}
