//! Lineage Store - seed loading for family trees
//!
//! Provides:
//! - The tab-delimited family log format
//! - Seed Format v0 (YAML)
//! - Digest canonicalization
//! - Importer that replays seed events into a `FamilyTree`
//! - The bundled Lengaburu family

pub mod errors;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use seed::{default_family, import_seed, import_seed_str, ImportedTree, Seed, SeedFormat};
