use serde::{Deserialize, Serialize};

use super::tree::FamilyTree;
use crate::errors::{FamilyError, Result};
use crate::model::{PersonId, Sex, UnionId};
use crate::traversal::locate::find_person;

/// Result of `add_child_to_mother`, rendered as the command output sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildAdditionOutcome {
    ChildAdditionSucceeded,
    ChildAdditionFailed,
    PersonNotFound,
}

impl ChildAdditionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildAdditionOutcome::ChildAdditionSucceeded => "CHILD_ADDITION_SUCCEEDED",
            ChildAdditionOutcome::ChildAdditionFailed => "CHILD_ADDITION_FAILED",
            ChildAdditionOutcome::PersonNotFound => "PERSON_NOT_FOUND",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ChildAdditionOutcome::ChildAdditionSucceeded)
    }
}

impl std::fmt::Display for ChildAdditionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the root person
///
/// # Errors
/// * `RootAlreadyExists` - If the tree already has a root
pub fn create_root(tree: &mut FamilyTree, name: String, sex: Sex) -> Result<PersonId> {
    if let Some(root) = tree.root() {
        return Err(FamilyError::RootAlreadyExists {
            name: root.name().to_string(),
        });
    }

    let id = tree.insert_person(name, sex);
    tree.root = Some(id);
    Ok(id)
}

/// Marry two people already in the tree
///
/// Both become each other's spouse and start sharing one children
/// collection owned by the new union. Nothing changes on failure.
///
/// # Errors
/// * `PersonIdInvalid` - If either id is unknown
/// * `AlreadyMarried` - If either person already has a spouse
/// * `IncompatibleSexes` - If both have the same sex (or are the same person)
pub fn marry(tree: &mut FamilyTree, first: PersonId, second: PersonId) -> Result<UnionId> {
    validate_marriage(tree, first, second)?;

    let union_id = tree.insert_union(first, second);
    for (id, spouse) in [(first, second), (second, first)] {
        let person = tree.get_person_mut(id)?;
        person.spouse = Some(spouse);
        person.union_id = Some(union_id);
    }

    Ok(union_id)
}

fn validate_marriage(tree: &FamilyTree, first: PersonId, second: PersonId) -> Result<()> {
    let a = tree.get_person(first)?;
    let b = tree.get_person(second)?;

    for person in [a, b] {
        if person.has_spouse() {
            return Err(FamilyError::AlreadyMarried {
                name: person.name.clone(),
            });
        }
    }

    if first == second || a.sex == b.sex {
        return Err(FamilyError::IncompatibleSexes {
            first: a.name.clone(),
            second: b.name.clone(),
        });
    }

    Ok(())
}

/// Marry someone new into the family
///
/// Creates `spouse_name` with the sex opposite to `person_name`'s (Male gets
/// a Female spouse, anyone else a Male one) and marries them.
///
/// # Errors
/// * `PersonNotFound` - If `person_name` is not in the tree
/// * `DuplicateName` - If `spouse_name` is already taken
/// * `AlreadyMarried` - If `person_name` already has a spouse
pub fn marry_new_spouse(
    tree: &mut FamilyTree,
    person_name: &str,
    spouse_name: String,
) -> Result<PersonId> {
    let person_id = find_person(tree, person_name).ok_or_else(|| FamilyError::PersonNotFound {
        name: person_name.to_string(),
    })?;
    ensure_name_free(tree, &spouse_name)?;

    let person = tree.get_person(person_id)?;
    if person.has_spouse() {
        return Err(FamilyError::AlreadyMarried {
            name: person.name.clone(),
        });
    }

    let spouse_sex = person.sex.opposite();
    let spouse_id = tree.insert_person(spouse_name, spouse_sex);
    marry(tree, person_id, spouse_id)?;

    Ok(spouse_id)
}

/// Add a child to a married person
///
/// The child's father is the Male member of the union whichever spouse is
/// named as `parent`. A union without a Male member yields a fatherless
/// child. The child is appended to the union's shared collection.
///
/// Child names are not required to be unique; lookups by name return the
/// first match in search order.
///
/// # Errors
/// * `PersonIdInvalid` - If `parent` is unknown
/// * `ChildWithoutSpouse` - If `parent` is unmarried
pub fn have_child(
    tree: &mut FamilyTree,
    parent: PersonId,
    child_name: String,
    sex: Sex,
) -> Result<PersonId> {
    let parent_person = tree.get_person(parent)?;
    let union_id = match (parent_person.spouse, parent_person.union_id) {
        (Some(_), Some(union_id)) => union_id,
        _ => {
            return Err(FamilyError::ChildWithoutSpouse {
                parent: parent_person.name.clone(),
            })
        }
    };

    let father = tree
        .get_union(union_id)?
        .members
        .into_iter()
        .find(|id| tree.get_person(*id).is_ok_and(|p| p.is_male()));

    let child_id = tree.insert_person(child_name, sex);
    tree.get_person_mut(child_id)?.father = father;
    tree.get_union_mut(union_id)?.children.push(child_id);

    Ok(child_id)
}

/// Add a child to the parent found by name
///
/// # Errors
/// * `PersonNotFound` - If `parent_name` is not in the tree
/// * Anything `have_child` returns
pub fn add_child(
    tree: &mut FamilyTree,
    parent_name: &str,
    child_name: String,
    sex: Sex,
) -> Result<PersonId> {
    let parent = find_person(tree, parent_name).ok_or_else(|| FamilyError::PersonNotFound {
        name: parent_name.to_string(),
    })?;
    have_child(tree, parent, child_name, sex)
}

/// Add a child through its mother
///
/// The mother must exist and be Female. After insertion the child is looked
/// up again by name and its father must be the mother's spouse; otherwise
/// the addition is reported as failed. A failed check does not remove the
/// inserted child.
pub fn add_child_to_mother(
    tree: &mut FamilyTree,
    mother_name: &str,
    child_name: &str,
    sex: Sex,
) -> ChildAdditionOutcome {
    let Some(mother_id) = find_person(tree, mother_name) else {
        return ChildAdditionOutcome::PersonNotFound;
    };

    let (is_female, mother_spouse) = match tree.get_person(mother_id) {
        Ok(mother) => (mother.is_female(), mother.spouse),
        Err(_) => return ChildAdditionOutcome::PersonNotFound,
    };
    if !is_female {
        tracing::debug!(mother = mother_name, "child rejected: parent is not female");
        return ChildAdditionOutcome::ChildAdditionFailed;
    }

    if let Err(err) = have_child(tree, mother_id, child_name.to_string(), sex) {
        tracing::debug!(mother = mother_name, child = child_name, error = %err, "child rejected");
        return ChildAdditionOutcome::ChildAdditionFailed;
    }

    let father = find_person(tree, child_name)
        .and_then(|child| tree.get_person(child).ok())
        .and_then(|child| child.father);

    match (father, mother_spouse) {
        (Some(father), Some(spouse)) if father == spouse => {
            ChildAdditionOutcome::ChildAdditionSucceeded
        }
        _ => ChildAdditionOutcome::ChildAdditionFailed,
    }
}

fn ensure_name_free(tree: &FamilyTree, name: &str) -> Result<()> {
    if find_person(tree, name).is_some() {
        return Err(FamilyError::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}
