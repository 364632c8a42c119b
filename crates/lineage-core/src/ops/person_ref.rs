use crate::model::{Person, PersonId, Sex};

use super::tree::FamilyTree;

/// Borrowed, navigable view of a person
///
/// Pairs a `Person` with the tree it lives in so relationship links can be
/// followed directly: `person.father()?.spouse()`. Links that do not resolve
/// read as absent.
#[derive(Debug, Clone, Copy)]
pub struct PersonRef<'a> {
    tree: &'a FamilyTree,
    person: &'a Person,
}

impl<'a> PersonRef<'a> {
    pub(crate) fn new(tree: &'a FamilyTree, person: &'a Person) -> Self {
        Self { tree, person }
    }

    pub fn id(&self) -> PersonId {
        self.person.id
    }

    pub fn name(&self) -> &'a str {
        &self.person.name
    }

    pub fn sex(&self) -> Sex {
        self.person.sex
    }

    /// Underlying record
    pub fn person(&self) -> &'a Person {
        self.person
    }

    pub fn father(&self) -> Option<PersonRef<'a>> {
        self.person.father.and_then(|id| self.tree.person(id).ok())
    }

    pub fn spouse(&self) -> Option<PersonRef<'a>> {
        self.person.spouse.and_then(|id| self.tree.person(id).ok())
    }

    /// Mother, derived as the father's spouse
    ///
    /// None when there is no father or the father is unmarried.
    pub fn mother(&self) -> Option<PersonRef<'a>> {
        self.father().and_then(|father| father.spouse())
    }

    /// Ids of the shared children collection, in insertion order
    pub fn child_ids(&self) -> &'a [PersonId] {
        self.tree.children_of(self.person.id)
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = PersonRef<'a>> + 'a {
        let tree = self.tree;
        self.child_ids()
            .iter()
            .filter_map(move |id| tree.person(*id).ok())
    }

    pub fn has_father(&self) -> bool {
        self.person.has_father()
    }

    pub fn has_spouse(&self) -> bool {
        self.person.has_spouse()
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids().is_empty()
    }

    /// First direct child with the given name
    pub fn get_child(&self, name: &str) -> Option<PersonRef<'a>> {
        self.children().find(|child| child.name() == name)
    }
}

impl PartialEq for PersonRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.person.id == other.person.id
    }
}

impl Eq for PersonRef<'_> {}
