//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import

use lineage_core::{Sex, TreeEvent};
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Family metadata
    pub family: SeedFamily,

    /// First person of the tree
    pub root: SeedRoot,

    /// Births and marriages, applied in order after the root
    ///
    /// Each entry is a single-key map naming the event.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<SeedEvent>,
}

/// Family metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFamily {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRoot {
    pub name: String,
    pub sex: Sex,
}

/// One event entry, written as a single-key map
///
/// ```yaml
/// - marry: { person: King Shan, spouse: Queen Anga }
/// - have_child: { parent: Queen Anga, child: Chit, sex: male }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedEvent {
    Marry {
        person: String,
        spouse: String,
    },
    HaveChild {
        parent: String,
        child: String,
        sex: Sex,
    },
}

impl SeedV0 {
    /// Flatten into the event sequence the importer replays
    pub fn to_events(&self) -> Vec<TreeEvent> {
        let root = TreeEvent::CreateRoot {
            name: self.root.name.clone(),
            sex: self.root.sex,
        };

        std::iter::once(root)
            .chain(self.events.iter().map(|event| match event {
                SeedEvent::Marry { person, spouse } => TreeEvent::Marry {
                    person: person.clone(),
                    spouse: spouse.clone(),
                },
                SeedEvent::HaveChild { parent, child, sex } => TreeEvent::AddChild {
                    parent: parent.clone(),
                    child: child.clone(),
                    sex: *sex,
                },
            }))
            .collect()
    }
}
