//! Engine-level mutating commands.

use std::time::Instant;

use lineage_core::ops::person_ops::add_child_to_mother;
use lineage_core::{log_op_end, log_op_start, ChildAdditionOutcome, FamilyTree, Sex};

/// Commands that grow the tree while a batch runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Add a child through its mother
    AddChild {
        mother: String,
        child: String,
        sex: Sex,
    },
}

/// Apply an engine command
///
/// Rejections are outcomes, not errors: the tree is left unchanged and the
/// outcome says why.
pub fn apply_engine_command(tree: &mut FamilyTree, cmd: EngineCommand) -> ChildAdditionOutcome {
    match cmd {
        EngineCommand::AddChild { mother, child, sex } => {
            log_op_start!("add_child", person = mother.as_str(), child = child.as_str());
            let start = Instant::now();

            let outcome = add_child_to_mother(tree, &mother, &child, sex);

            log_op_end!(
                "add_child",
                duration_ms = start.elapsed().as_millis() as u64,
                result = outcome.as_str()
            );
            outcome
        }
    }
}
