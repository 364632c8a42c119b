//! Show command
//!
//! Usage: lineage show [--seed <PATH>] [--person <NAME>]

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use lineage_engine::commands::engine_query::{apply_engine_query, EngineQuery};
use lineage_engine::load_family;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Family seed; defaults to the bundled Lengaburu family
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Describe one person instead of printing the whole tree
    #[arg(long)]
    pub person: Option<String>,
}

/// Execute show
pub fn execute(args: ShowArgs) -> Result<()> {
    let tree = load_family(args.seed.as_deref())?.tree;

    let query = match args.person {
        Some(name) => EngineQuery::DescribePerson { name },
        None => EngineQuery::RenderTree,
    };
    println!("{}", apply_engine_query(&tree, query)?);

    Ok(())
}
