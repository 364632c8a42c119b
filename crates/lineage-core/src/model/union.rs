use super::person::PersonId;

/// Index of a union inside the `FamilyTree` that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnionId(pub usize);

/// Union - a marriage and the children it owns
///
/// `members[0]` is the person who was already in the tree, `members[1]` the
/// person who married in. Children are insertion-ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Union {
    pub id: UnionId,
    pub members: [PersonId; 2],
    pub children: Vec<PersonId>,
}

impl Union {
    pub fn new(id: UnionId, first: PersonId, second: PersonId) -> Self {
        Self {
            id,
            members: [first, second],
            children: Vec::new(),
        }
    }

    pub fn contains(&self, person: PersonId) -> bool {
        self.members.contains(&person)
    }

    /// The other member of the union, if `person` is one of them
    pub fn partner_of(&self, person: PersonId) -> Option<PersonId> {
        match self.members {
            [a, b] if a == person => Some(b),
            [a, b] if b == person => Some(a),
            _ => None,
        }
    }
}
