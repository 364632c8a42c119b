use crate::errors::{FamilyError, Result};
use crate::model::Sex;
use crate::ops::{FamilyTree, PersonRef};
use crate::traversal::locate::find_person;

/// One-line summary of a person and their immediate family
///
/// ```text
/// Chit (male), son of King Shan and Queen Anga, married to Amba, children: Dritha Tritha Vritha
/// ```
///
/// # Errors
/// * `PersonNotFound` - If `name` is not in the tree
pub fn describe_person(tree: &FamilyTree, name: &str) -> Result<String> {
    let person = find_person(tree, name)
        .and_then(|id| tree.person(id).ok())
        .ok_or_else(|| FamilyError::PersonNotFound {
            name: name.to_string(),
        })?;

    let mut parts = vec![format!("{} ({})", person.name(), person.sex())];

    if let Some(father) = person.father() {
        let role = match person.sex() {
            Sex::Male => "son",
            Sex::Female => "daughter",
            Sex::Other => "child",
        };
        match person.mother() {
            Some(mother) => parts.push(format!(
                "{} of {} and {}",
                role,
                father.name(),
                mother.name()
            )),
            None => parts.push(format!("{} of {}", role, father.name())),
        }
    }

    if let Some(spouse) = person.spouse() {
        parts.push(format!("married to {}", spouse.name()));
    }

    if person.has_children() {
        parts.push(format!("children: {}", join_names(person.children())));
    }

    Ok(parts.join(", "))
}

fn join_names<'a>(people: impl Iterator<Item = PersonRef<'a>>) -> String {
    people.map(|p| p.name()).collect::<Vec<_>>().join(" ")
}
