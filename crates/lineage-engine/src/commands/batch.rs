//! Batch processing of input records
//!
//! Each record produces exactly one output line. Malformed records print
//! `NONE` and are logged as errors; later records are unaffected.

use std::io::{BufRead, Write};
use std::time::Instant;

use lineage_core::{log_op_end, log_op_error, log_op_start, FamilyTree};
use lineage_store::errors::io_error;

use crate::commands::engine_command::apply_engine_command;
use crate::commands::engine_query::apply_engine_query;
use crate::commands::input::{parse_record, InputRecord};
use crate::errors::Result;

const NONE_OUTPUT: &str = "NONE";

/// Counts from a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records read, malformed ones included
    pub records: usize,
    /// Records answered with `NONE` because they could not be parsed
    pub malformed: usize,
}

/// Process one input line and return its output
pub fn process_line(tree: &mut FamilyTree, line: &str) -> String {
    run_line(tree, line).0
}

// Output plus whether the record was malformed
fn run_line(tree: &mut FamilyTree, line: &str) -> (String, bool) {
    let start = Instant::now();
    let record = match parse_record(line) {
        Ok(record) => record,
        Err(err) => {
            log_op_error!(
                "process_line",
                err,
                duration_ms = start.elapsed().as_millis() as u64
            );
            return (NONE_OUTPUT.to_string(), true);
        }
    };

    let output = match record {
        InputRecord::Command(cmd) => apply_engine_command(tree, cmd).to_string(),
        InputRecord::Query(query) => match apply_engine_query(tree, query) {
            Ok(result) => result.to_string(),
            Err(_) => NONE_OUTPUT.to_string(),
        },
    };
    (output, false)
}

/// Process every line in order, one output per line
pub fn process_batch<I, S>(tree: &mut FamilyTree, lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| process_line(tree, line.as_ref()))
        .collect()
}

/// Stream records from `reader`, writing one output line each to `writer`
///
/// # Errors
/// `Io` if reading or writing fails. Record-level failures never error.
pub fn process_reader<R, W>(tree: &mut FamilyTree, reader: R, mut writer: W) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    log_op_start!("process_batch");
    let start = Instant::now();

    let result = (|| -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();
        for line in reader.lines() {
            let line = line.map_err(|e| io_error("batch_read", e))?;
            let (output, malformed) = run_line(tree, &line);
            summary.records += 1;
            if malformed {
                summary.malformed += 1;
            }
            writeln!(writer, "{}", output).map_err(|e| io_error("batch_write", e))?;
        }
        writer.flush().map_err(|e| io_error("batch_write", e))?;
        Ok(summary)
    })();

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(summary) => {
            log_op_end!(
                "process_batch",
                duration_ms = duration_ms,
                records = summary.records,
                malformed = summary.malformed
            );
        }
        Err(err) => {
            log_op_error!("process_batch", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_core::{apply, Sex, TreeEvent};

    fn couple() -> FamilyTree {
        let mut tree = FamilyTree::new();
        apply(
            &mut tree,
            TreeEvent::CreateRoot {
                name: "Chit".to_string(),
                sex: Sex::Male,
            },
        )
        .unwrap();
        apply(
            &mut tree,
            TreeEvent::Marry {
                person: "Chit".to_string(),
                spouse: "Amba".to_string(),
            },
        )
        .unwrap();
        tree
    }

    #[test]
    fn test_malformed_record_prints_none_and_batch_continues() {
        let mut tree = couple();
        let outputs = process_batch(
            &mut tree,
            [
                "ADD_CHILD Amba Dritha",
                "ADD_CHILD Amba Dritha Female",
                "GET_RELATIONSHIP Chit Daughter",
            ],
        );

        assert_eq!(outputs, vec!["NONE", "CHILD_ADDITION_SUCCEEDED", "Dritha"]);
    }

    #[test]
    fn test_process_reader_streams_and_counts() {
        let mut tree = couple();
        let input = "GET_RELATIONSHIP Chit Son\nHELLO\nGET_RELATIONSHIP Ghost Son\n";
        let mut out = Vec::new();

        let summary = process_reader(&mut tree, input.as_bytes(), &mut out).unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                records: 3,
                malformed: 1
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "NONE\nNONE\nPERSON_NOT_FOUND\n"
        );
    }
}
