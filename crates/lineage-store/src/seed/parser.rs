//! Seed parser with validation
//!
//! Reads either seed format into one event sequence

use std::fs;
use std::path::Path;

use lineage_core::TreeEvent;

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::{SeedEvent, SeedV0};
use crate::seed::log_format::parse_family_log;

/// A parsed seed, ready to import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    /// Family name from YAML metadata; family logs carry none
    pub family_name: Option<String>,

    /// Events in application order, starting with `CreateRoot`
    pub events: Vec<TreeEvent>,
}

/// On-disk seed format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    /// Tab-delimited `HAVE_KID` / `MARRY` records
    FamilyLog,
    /// YAML Seed Format v0
    YamlV0,
}

impl SeedFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` is YAML,
    /// anything else a family log
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => SeedFormat::YamlV0,
            _ => SeedFormat::FamilyLog,
        }
    }
}

/// Parse a seed file from a path
///
/// # Errors
/// `Io` if the file cannot be read, `InvalidInput` if it does not validate.
pub fn parse_seed_file(path: &Path) -> Result<Seed> {
    let content = fs::read_to_string(path).map_err(|e| {
        let reason = format!("Failed to read seed file {}: {}", path.display(), e);
        io_error("seed_read", e).with_message(reason)
    })?;

    parse_seed_str(&content, SeedFormat::from_path(path))
}

/// Parse a seed from a string
///
/// # Errors
/// `InvalidInput` if the content does not validate for `format`.
pub fn parse_seed_str(content: &str, format: SeedFormat) -> Result<Seed> {
    match format {
        SeedFormat::FamilyLog => {
            let events = parse_family_log(content)?;
            if events.is_empty() {
                return Err(seed_validation("Family log has no records"));
            }
            Ok(Seed {
                family_name: None,
                events,
            })
        }
        SeedFormat::YamlV0 => {
            let seed: SeedV0 = serde_yaml::from_str(content)
                .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;
            validate_seed(&seed)?;
            Ok(Seed {
                family_name: Some(seed.family.name.clone()),
                events: seed.to_events(),
            })
        }
    }
}

/// Validate a parsed YAML seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    if seed.root.name.trim().is_empty() {
        return Err(seed_validation("Root name must not be empty"));
    }

    for (index, event) in seed.events.iter().enumerate() {
        let names = match event {
            SeedEvent::Marry { person, spouse } => [person, spouse],
            SeedEvent::HaveChild { parent, child, .. } => [parent, child],
        };
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(seed_validation(&format!(
                "Event {} has an empty name",
                index
            )));
        }
    }

    Ok(())
}
