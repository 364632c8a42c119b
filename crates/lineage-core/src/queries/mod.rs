//! Read-only relationship queries
//!
//! Every relationship kind has one rule that walks the tree from the located
//! person and yields candidates in the insertion order of the children
//! collections it reads. Queries never mutate the tree.

pub mod relationship_queries;

pub use relationship_queries::{resolve, resolve_str, rule_for, Resolution, RelationshipRule};
