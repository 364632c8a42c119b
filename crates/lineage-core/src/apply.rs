//! Single entry point for applying tree events
//!
//! ## Atomicity Contract
//!
//! Every mutator validates before it writes, so an event either applies in
//! full or returns an error with the tree untouched.
//!
//! ## Example
//!
//! ```
//! use lineage_core::{apply, FamilyTree, Sex, TreeEvent};
//!
//! let mut tree = FamilyTree::new();
//! apply(&mut tree, TreeEvent::CreateRoot { name: "King Shan".to_string(), sex: Sex::Male }).unwrap();
//! apply(&mut tree, TreeEvent::Marry { person: "King Shan".to_string(), spouse: "Queen Anga".to_string() }).unwrap();
//! assert_eq!(tree.len(), 2);
//! ```

use crate::commands::TreeEvent;
use crate::errors::{FamilyError, Result};
use crate::model::PersonId;
use crate::ops::{person_ops, FamilyTree};

/// Apply one event to the tree
///
/// Returns the id of the person the event created: the root, the child or
/// the new spouse.
///
/// # Errors
/// Whatever the underlying mutator returns; the tree is unchanged on error.
pub fn apply(tree: &mut FamilyTree, event: TreeEvent) -> Result<PersonId> {
    match event {
        TreeEvent::CreateRoot { name, sex } => person_ops::create_root(tree, name, sex),
        TreeEvent::AddChild { parent, child, sex } => {
            person_ops::add_child(tree, &parent, child, sex)
        }
        TreeEvent::Marry { person, spouse } => person_ops::marry_new_spouse(tree, &person, spouse),
    }
}

/// Apply events in order, stopping at the first failure
///
/// # Errors
/// Returns the index of the failing event with its error. Events before it
/// stay applied.
pub fn apply_all<I>(
    tree: &mut FamilyTree,
    events: I,
) -> std::result::Result<usize, (usize, FamilyError)>
where
    I: IntoIterator<Item = TreeEvent>,
{
    let mut applied = 0;
    for (index, event) in events.into_iter().enumerate() {
        apply(tree, event).map_err(|err| (index, err))?;
        applied += 1;
    }
    Ok(applied)
}
