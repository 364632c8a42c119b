//! Tab-delimited family log
//!
//! ```text
//! HAVE_KID<TAB>parent<TAB>child<TAB>sex
//! MARRY<TAB>person<TAB>new_spouse
//! ```
//!
//! The first record must be a `HAVE_KID`; it creates the root from the child
//! column and its parent column is ignored. Blank lines and lines starting
//! with `#` are skipped.

use lineage_core::{Sex, TreeEvent};

use crate::errors::{seed_validation_at, Result};

const HAVE_KID: &str = "HAVE_KID";
const MARRY: &str = "MARRY";

/// Parse a family log into tree events
///
/// # Errors
/// `InvalidInput` naming the line for unknown commands, wrong field counts,
/// empty names, or a first record that is not `HAVE_KID`.
pub fn parse_family_log(content: &str) -> Result<Vec<TreeEvent>> {
    let mut events = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let event = match fields.as_slice() {
            [HAVE_KID, parent, child, sex] => {
                let child = required(line_no, "child", child)?;
                let sex = Sex::parse(sex);
                if events.is_empty() {
                    TreeEvent::CreateRoot { name: child, sex }
                } else {
                    TreeEvent::AddChild {
                        parent: required(line_no, "parent", parent)?,
                        child,
                        sex,
                    }
                }
            }
            [MARRY, person, spouse] => {
                if events.is_empty() {
                    return Err(seed_validation_at(
                        line_no,
                        "First record must be HAVE_KID to create the root",
                    ));
                }
                TreeEvent::Marry {
                    person: required(line_no, "person", person)?,
                    spouse: required(line_no, "spouse", spouse)?,
                }
            }
            [HAVE_KID, ..] => {
                return Err(seed_validation_at(
                    line_no,
                    &format!("HAVE_KID expects 4 fields, found {}", fields.len()),
                ))
            }
            [MARRY, ..] => {
                return Err(seed_validation_at(
                    line_no,
                    &format!("MARRY expects 3 fields, found {}", fields.len()),
                ))
            }
            [command, ..] => {
                return Err(seed_validation_at(
                    line_no,
                    &format!("Unknown command: {}", command),
                ))
            }
            [] => continue,
        };
        events.push(event);
    }

    Ok(events)
}

fn required(line_no: usize, field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(seed_validation_at(
            line_no,
            &format!("Empty {} name", field),
        ));
    }
    Ok(value.to_string())
}
