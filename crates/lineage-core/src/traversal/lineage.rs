use crate::errors::{FamilyError, Result};
use crate::model::PersonId;
use crate::ops::FamilyTree;

/// Paternal line from the eldest known ancestor down to `person`
///
/// Follows father links upward and reverses, so the result starts at a
/// fatherless ancestor and ends with `person` itself.
///
/// # Errors
/// * `PersonIdInvalid` - If `person` is unknown
/// * `FatherChainBroken` - If a father link dangles or the chain revisits a person
pub fn ancestry(tree: &FamilyTree, person: PersonId) -> Result<Vec<PersonId>> {
    tree.get_person(person)?;

    let mut path = Vec::new();
    let mut current = Some(person);

    while let Some(id) = current {
        // A well-formed chain can never be longer than the tree
        if path.len() >= tree.len() {
            return Err(FamilyError::FatherChainBroken {
                name: tree.get_person(id)?.name.clone(),
            });
        }
        path.push(id);

        let p = tree.get_person(id)?;
        current = match p.father {
            Some(father) if tree.get_person(father).is_err() => {
                return Err(FamilyError::FatherChainBroken {
                    name: p.name.clone(),
                })
            }
            father => father,
        };
    }

    path.reverse();
    Ok(path)
}
