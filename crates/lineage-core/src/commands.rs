//! Events that grow a family tree
//!
//! Seed loaders produce these and `apply()` executes them in order.

use serde::{Deserialize, Serialize};

use crate::model::Sex;

/// One birth or marriage record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeEvent {
    /// Create the first person; valid only on an empty tree
    CreateRoot { name: String, sex: Sex },

    /// Add a child to the married person named `parent`
    AddChild {
        parent: String,
        child: String,
        sex: Sex,
    },

    /// Create `spouse` with the sex opposite to `person` and marry them
    Marry { person: String, spouse: String },
}

impl TreeEvent {
    /// Short name used in logs and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            TreeEvent::CreateRoot { .. } => "create_root",
            TreeEvent::AddChild { .. } => "add_child",
            TreeEvent::Marry { .. } => "marry",
        }
    }
}
