//! Seed import system
//!
//! Provides:
//! - Family log format (tab-delimited)
//! - Seed Format v0 schema (YAML)
//! - Parser with validation
//! - Digest canonicalization
//! - Importer orchestration
//! - Bundled default family

pub mod bundled;
pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod log_format;
pub mod parser;

pub use bundled::default_family;
pub use digest::compute_seed_digest;
pub use format_v0::SeedV0;
pub use importer::{import_parsed, import_seed, import_seed_str, ImportedTree};
pub use parser::{parse_seed_file, parse_seed_str, Seed, SeedFormat};
