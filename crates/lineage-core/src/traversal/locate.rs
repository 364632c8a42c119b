use crate::model::PersonId;
use crate::ops::{FamilyTree, PersonRef};

/// Find a person by exact, case-sensitive name starting at the root
///
/// Returns None when the tree is empty or nobody matches.
pub fn find_person(tree: &FamilyTree, name: &str) -> Option<PersonId> {
    let root = tree.root()?;
    search(root, name).map(|p| p.id())
}

/// Find a person by name in the subtree rooted at `start`
///
/// The subtree covers `start`, their spouse and all descendants reachable
/// through children, including the descendants' spouses.
pub fn find_person_from(tree: &FamilyTree, start: PersonId, name: &str) -> Option<PersonId> {
    let start = tree.person(start).ok()?;
    search(start, name).map(|p| p.id())
}

// Order: the person, their spouse, every direct child, then each child's
// subtree in insertion order. First match wins.
fn search<'a>(person: PersonRef<'a>, name: &str) -> Option<PersonRef<'a>> {
    if person.name() == name {
        return Some(person);
    }

    if let Some(spouse) = person.spouse().filter(|s| s.name() == name) {
        return Some(spouse);
    }

    if let Some(child) = person.get_child(name) {
        return Some(child);
    }

    person.children().find_map(|child| search(child, name))
}
