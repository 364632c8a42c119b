use crate::errors::{FamilyError, Result};
use crate::model::{Person, PersonId, Sex, Union, UnionId};

use super::person_ref::PersonRef;

/// In-memory family tree
///
/// An arena owning every `Person` and `Union`. Ids are indices and nothing is
/// ever removed, so an id handed out by a tree stays valid for its lifetime.
/// Not thread-safe - designed for a single writer. All storage access is
/// encapsulated here; mutation with invariant checks lives in `person_ops`.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    pub(crate) people: Vec<Person>,
    pub(crate) unions: Vec<Union>,
    pub(crate) root: Option<PersonId>,
}

impl FamilyTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the root person, if one has been created
    pub fn root_id(&self) -> Option<PersonId> {
        self.root
    }

    /// Navigable view of the root person
    pub fn root(&self) -> Option<PersonRef<'_>> {
        self.root.and_then(|id| self.person(id).ok())
    }

    /// Get a person by id
    ///
    /// # Errors
    ///
    /// Returns `PersonIdInvalid` if the id was not issued by this tree.
    pub fn get_person(&self, id: PersonId) -> Result<&Person> {
        self.people
            .get(id.0)
            .ok_or(FamilyError::PersonIdInvalid { id: id.0 })
    }

    /// Get a mutable reference to a person by id
    ///
    /// Bypasses every invariant check. Public so tests can build corrupted
    /// trees for the validation rules.
    ///
    /// # Errors
    ///
    /// Returns `PersonIdInvalid` if the id was not issued by this tree.
    pub fn get_person_mut(&mut self, id: PersonId) -> Result<&mut Person> {
        self.people
            .get_mut(id.0)
            .ok_or(FamilyError::PersonIdInvalid { id: id.0 })
    }

    /// Navigable view of a person
    ///
    /// # Errors
    ///
    /// Returns `PersonIdInvalid` if the id was not issued by this tree.
    pub fn person(&self, id: PersonId) -> Result<PersonRef<'_>> {
        let person = self.get_person(id)?;
        Ok(PersonRef::new(self, person))
    }

    /// Get a union by id
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the id was not issued by this tree.
    pub fn get_union(&self, id: UnionId) -> Result<&Union> {
        self.unions.get(id.0).ok_or_else(|| FamilyError::Internal {
            message: format!("union id {} does not belong to this tree", id.0),
        })
    }

    /// Get a mutable reference to a union by id
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the id was not issued by this tree.
    pub fn get_union_mut(&mut self, id: UnionId) -> Result<&mut Union> {
        self.unions
            .get_mut(id.0)
            .ok_or_else(|| FamilyError::Internal {
                message: format!("union id {} does not belong to this tree", id.0),
            })
    }

    /// Children of a person, in insertion order
    ///
    /// This is the union's collection, so spouses get the same slice.
    /// Unmarried people (and unknown ids) have no children.
    pub fn children_of(&self, id: PersonId) -> &[PersonId] {
        self.get_person(id)
            .ok()
            .and_then(|p| p.union_id)
            .and_then(|u| self.unions.get(u.0))
            .map(|u| u.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_children(&self, id: PersonId) -> bool {
        !self.children_of(id).is_empty()
    }

    /// First direct child with the given name; never looks at grandchildren
    pub fn get_child(&self, id: PersonId, name: &str) -> Option<PersonId> {
        self.children_of(id)
            .iter()
            .copied()
            .find(|c| self.people.get(c.0).is_some_and(|p| p.name == name))
    }

    /// Number of people in the tree
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All people in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// All unions in creation order
    pub fn unions(&self) -> &[Union] {
        &self.unions
    }

    /// Allocate an unattached person
    pub(crate) fn insert_person(&mut self, name: String, sex: Sex) -> PersonId {
        let id = PersonId(self.people.len());
        self.people.push(Person::new(id, name, sex));
        id
    }

    /// Allocate an empty union between two people
    ///
    /// Does not touch the members; `person_ops::marry` wires them up.
    pub(crate) fn insert_union(&mut self, first: PersonId, second: PersonId) -> UnionId {
        let id = UnionId(self.unions.len());
        self.unions.push(Union::new(id, first, second));
        id
    }
}
