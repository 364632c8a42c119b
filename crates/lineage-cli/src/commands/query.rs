//! One-off relationship query
//!
//! Usage: lineage query <NAME> <RELATION> [--seed <PATH>]

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lineage_core::RelationshipKind;
use lineage_engine::commands::engine_query::{apply_engine_query, EngineQuery};
use lineage_engine::load_family;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Person to start from (spaces allowed)
    pub name: String,

    /// Relationship keyword, e.g. paternal-uncle or sister-in-law
    pub relation: String,

    /// Family seed; defaults to the bundled Lengaburu family
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

/// Execute a relationship query
pub fn execute(args: QueryArgs) -> Result<()> {
    let tree = load_family(args.seed.as_deref())?.tree;

    let result = apply_engine_query(
        &tree,
        EngineQuery::GetRelationship {
            name: args.name,
            relation: RelationshipKind::parse(&args.relation),
        },
    )?;
    println!("{}", result);

    Ok(())
}
