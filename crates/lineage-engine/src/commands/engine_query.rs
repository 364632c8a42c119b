//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for read-only queries. It
//! takes the tree by shared reference and never mutates it.

use std::time::Instant;

use lineage_core::render::{describe_person, render_tree};
use lineage_core::{
    log_op_end, log_op_error, log_op_start, resolve, FamilyTree, RelationshipKind, Resolution,
};

use crate::errors::Result;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// People related to `name` by `relation`
    GetRelationship {
        name: String,
        relation: RelationshipKind,
    },

    /// One-line summary of a person
    DescribePerson { name: String },

    /// Indented outline of the whole tree
    RenderTree,
}

/// Result of an engine query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    Relationship(Resolution),
    Description(String),
    Outline(String),
}

impl std::fmt::Display for EngineQueryResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineQueryResult::Relationship(resolution) => write!(f, "{}", resolution),
            EngineQueryResult::Description(text) => f.write_str(text),
            EngineQueryResult::Outline(text) => f.write_str(text.trim_end()),
        }
    }
}

/// Apply a read-only engine query
///
/// Relationship queries always succeed: unknown people and empty results are
/// `Resolution` outcomes.
///
/// # Errors
/// `NotFound` when describing an unknown person or rendering an empty tree.
pub fn apply_engine_query(tree: &FamilyTree, query: EngineQuery) -> Result<EngineQueryResult> {
    match query {
        EngineQuery::GetRelationship { name, relation } => {
            log_op_start!(
                "get_relationship",
                person = name.as_str(),
                relation = relation.as_str()
            );
            let start = Instant::now();

            let resolution = resolve(tree, &name, relation);

            log_op_end!(
                "get_relationship",
                duration_ms = start.elapsed().as_millis() as u64,
                result_len = resolution.names().len()
            );
            Ok(EngineQueryResult::Relationship(resolution))
        }
        EngineQuery::DescribePerson { name } => {
            log_op_start!("describe_person", person = name.as_str());
            let start = Instant::now();

            let text = describe_person(tree, &name).map_err(|e| {
                log_op_error!(
                    "describe_person",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

            log_op_end!(
                "describe_person",
                duration_ms = start.elapsed().as_millis() as u64
            );
            Ok(EngineQueryResult::Description(text))
        }
        EngineQuery::RenderTree => {
            log_op_start!("render_tree");
            let start = Instant::now();

            let outline = render_tree(tree).map_err(|e| {
                log_op_error!(
                    "render_tree",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                e
            })?;

            log_op_end!(
                "render_tree",
                duration_ms = start.elapsed().as_millis() as u64,
                person_count = tree.len()
            );
            Ok(EngineQueryResult::Outline(outline))
        }
    }
}
