//! Lineage Core - in-memory family tree and relationship engine
//!
//! This crate provides:
//! - Person and union models held in an index-based arena (`FamilyTree`)
//! - Mutators that grow the tree (root, marriage, children)
//! - Name lookup and paternal-line traversal
//! - Relationship resolution (uncles, aunts, in-laws, siblings, children)
//! - Structural validation and plain-text rendering
//! - The error and logging facilities shared by the other lineage crates

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod render;
pub mod rules;
pub mod traversal;

// Re-export commonly used types
pub use apply::{apply, apply_all};
pub use commands::TreeEvent;
pub use errors::{ExError, ExErrorKind, FamilyError, Result};
pub use model::{Person, PersonId, RelationshipKind, Sex, Union, UnionId};
pub use ops::{ChildAdditionOutcome, FamilyTree, PersonRef};
pub use queries::{resolve, resolve_str, Resolution};
