//! Seed commands
//!
//! Usage: lineage seed check <PATH>

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use lineage_core::rules::validate_tree;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Parse and import a seed file without running anything
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to a family log or YAML seed
    pub path: PathBuf,
}

/// Execute seed command
pub fn execute(args: SeedArgs) -> Result<()> {
    match args.command {
        SeedCommand::Check(check_args) => execute_check(check_args),
    }
}

fn execute_check(args: CheckArgs) -> Result<()> {
    let imported = lineage_store::import_seed(&args.path)?;
    validate_tree(&imported.tree)?;

    println!("✓ Valid seed (digest: {})", imported.digest);
    if let Some(name) = &imported.family_name {
        println!("  family: {}", name);
    }
    println!("  events: {}", imported.event_count);
    if !imported.skipped.is_empty() {
        let indexes: Vec<String> = imported.skipped.iter().map(|i| i.to_string()).collect();
        println!("  skipped: {}", indexes.join(", "));
    }
    println!("  people: {}", imported.tree.len());

    Ok(())
}
