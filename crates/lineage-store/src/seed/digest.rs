//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility. Only the
//! event sequence is hashed, so a family log and a YAML seed describing the
//! same family share a digest.

use sha2::{Digest, Sha256};

use crate::errors::{serialization_error, Result};
use crate::seed::parser::Seed;

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonical JSON of the seed's events.
///
/// # Errors
/// `Serialization` if the events cannot be encoded.
pub fn compute_seed_digest(seed: &Seed) -> Result<String> {
    let json = serde_json::to_string(&seed.events)
        .map_err(|e| serialization_error("seed_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
