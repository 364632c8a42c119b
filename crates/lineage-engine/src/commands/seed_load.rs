//! Loading the family a batch runs against

use std::path::Path;
use std::time::Instant;

use lineage_core::{log_op_end, log_op_error, log_op_start};
use lineage_store::seed::{default_family, import_seed, ImportedTree};

use crate::errors::Result;

/// Load a family from a seed file, or the bundled Lengaburu family
///
/// # Errors
/// Any parse, validation or import error from the seed.
pub fn load_family(seed: Option<&Path>) -> Result<ImportedTree> {
    let source = seed
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    log_op_start!("load_family", seed = source.as_str());
    let start = Instant::now();

    let imported = match seed {
        Some(path) => import_seed(path),
        None => default_family(),
    }
    .map_err(|e| {
        log_op_error!(
            "load_family",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_family",
        duration_ms = start.elapsed().as_millis() as u64,
        person_count = imported.tree.len(),
        skipped = imported.skipped.len(),
        digest = imported.digest.as_str()
    );
    Ok(imported)
}
