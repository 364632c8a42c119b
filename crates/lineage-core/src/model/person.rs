use super::sex::Sex;
use super::union::UnionId;

/// Index of a person inside the `FamilyTree` that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub usize);

/// Person - a node of the family graph
///
/// Relationship links are ids into the owning tree, never owning pointers.
/// Children are not stored here: they belong to the person's `Union` so both
/// spouses observe the same collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Position in the owning tree's arena
    pub id: PersonId,

    /// Name, unique across the tree
    pub name: String,

    pub sex: Sex,

    /// Father (None for the root and for people who married in)
    pub father: Option<PersonId>,

    /// Spouse, mirrored on the other side
    pub spouse: Option<PersonId>,

    /// Union shared with the spouse
    pub union_id: Option<UnionId>,
}

impl Person {
    /// Create an unattached person: no father, spouse or union
    pub fn new(id: PersonId, name: String, sex: Sex) -> Self {
        Self {
            id,
            name,
            sex,
            father: None,
            spouse: None,
            union_id: None,
        }
    }

    pub fn has_father(&self) -> bool {
        self.father.is_some()
    }

    pub fn has_spouse(&self) -> bool {
        self.spouse.is_some()
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }
}
