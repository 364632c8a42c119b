//! Input record parsing
//!
//! Records are single lines split on single spaces:
//!
//! ```text
//! ADD_CHILD <mother> <child> <sex>
//! GET_RELATIONSHIP <name> <relation>
//! ```
//!
//! Names therefore cannot contain spaces on this surface.

use lineage_core::{RelationshipKind, Sex};

use crate::commands::engine_command::EngineCommand;
use crate::commands::engine_query::EngineQuery;
use crate::errors::{malformed_record, Result};

const ADD_CHILD: &str = "ADD_CHILD";
const GET_RELATIONSHIP: &str = "GET_RELATIONSHIP";

/// A validated input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRecord {
    Command(EngineCommand),
    Query(EngineQuery),
}

/// Parse one input line
///
/// Sex and relationship keywords are case-insensitive; unknown values map to
/// `Sex::Other` and `RelationshipKind::None`.
///
/// # Errors
/// `InvalidInput` for an unknown command or a wrong token count.
pub fn parse_record(line: &str) -> Result<InputRecord> {
    let tokens: Vec<&str> = line.split(' ').collect();

    match tokens.as_slice() {
        [ADD_CHILD, mother, child, sex] => Ok(InputRecord::Command(EngineCommand::AddChild {
            mother: mother.to_string(),
            child: child.to_string(),
            sex: Sex::parse(sex),
        })),
        [GET_RELATIONSHIP, name, relation] => {
            Ok(InputRecord::Query(EngineQuery::GetRelationship {
                name: name.to_string(),
                relation: RelationshipKind::parse(relation),
            }))
        }
        [ADD_CHILD, ..] => Err(malformed_record(&format!(
            "ADD_CHILD expects 3 arguments, found {}",
            tokens.len() - 1
        ))),
        [GET_RELATIONSHIP, ..] => Err(malformed_record(&format!(
            "GET_RELATIONSHIP expects 2 arguments, found {}",
            tokens.len() - 1
        ))),
        [command, ..] => Err(malformed_record(&format!("Unknown command: {:?}", command))),
        [] => Err(malformed_record("Empty record")),
    }
}
