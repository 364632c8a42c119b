//! The Lengaburu family shipped with the crate

use crate::errors::Result;
use crate::seed::importer::{import_seed_str, ImportedTree};
use crate::seed::parser::SeedFormat;

/// Family log of the Lengaburu royal family
pub const LENGABURU_FAMILY_LOG: &str = include_str!("../../seeds/lengaburu.tsv");

/// Import the bundled Lengaburu family
///
/// # Errors
/// Only if the bundled log itself is broken.
pub fn default_family() -> Result<ImportedTree> {
    import_seed_str(LENGABURU_FAMILY_LOG, SeedFormat::FamilyLog)
}
