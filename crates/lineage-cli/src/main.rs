//! Lineage CLI
//!
//! Command-line interface for family tree queries

use clap::{Parser, Subcommand, ValueEnum};
use lineage_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lineage")]
#[command(about = "Lineage - family tree relationship queries", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process an input file of ADD_CHILD / GET_RELATIONSHIP records
    Run(commands::run::RunArgs),
    /// Resolve a single relationship
    Query(commands::query::QueryArgs),
    /// Seed file operations
    Seed(commands::seed::SeedArgs),
    /// Print the family tree or one person
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Query(args) => commands::query::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
        Commands::Show(args) => commands::show::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
