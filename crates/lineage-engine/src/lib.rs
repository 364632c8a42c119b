//! Lineage Engine - Command processing layer
//!
//! Turns input records into tree mutations and relationship queries, and
//! owns lifecycle logging for them. Also loads the family a batch runs
//! against.

pub mod commands;
pub mod errors;

pub use commands::batch::{process_batch, process_line, process_reader, BatchSummary};
pub use commands::input::{parse_record, InputRecord};
pub use commands::seed_load::load_family;
