//! Batch run command
//!
//! Usage: lineage run [INPUT] [--seed <PATH>]
//!
//! Without INPUT the input path is read from the first line of stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Args;
use lineage_engine::{load_family, process_reader};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input file with one record per line
    pub input: Option<PathBuf>,

    /// Family seed (family log or YAML); defaults to the bundled Lengaburu family
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

/// Execute a batch run
pub fn execute(args: RunArgs) -> Result<()> {
    let input = match args.input {
        Some(path) => path,
        None => read_path_from_stdin()?,
    };

    let mut tree = load_family(args.seed.as_deref())?.tree;

    let file = File::open(&input)
        .map_err(|e| anyhow!("cannot open input file {}: {}", input.display(), e))?;
    let stdout = io::stdout();
    process_reader(&mut tree, BufReader::new(file), stdout.lock())?;

    Ok(())
}

// First stdin line, trimmed, with double quotes removed
fn read_path_from_stdin() -> Result<PathBuf> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| anyhow!("cannot read input path from stdin: {}", e))?;

    let path = line.trim().replace('"', "");
    if path.is_empty() {
        bail!("no input path given");
    }
    Ok(PathBuf::from(path))
}
