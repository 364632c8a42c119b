use crate::model::{RelationshipKind, Sex};
use crate::ops::{FamilyTree, PersonRef};
use crate::traversal::locate::find_person;

/// Candidate-producing rule for one relationship kind
pub type RelationshipRule = for<'a> fn(PersonRef<'a>) -> Vec<PersonRef<'a>>;

/// Outcome of a relationship query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Matching names in rule order; never empty
    Found(Vec<String>),
    PersonNotFound,
    None,
}

impl Resolution {
    /// Names found, empty for the sentinel outcomes
    pub fn names(&self) -> &[String] {
        match self {
            Resolution::Found(names) => names,
            _ => &[],
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Found(names) => f.write_str(&names.join(" ")),
            Resolution::PersonNotFound => f.write_str("PERSON_NOT_FOUND"),
            Resolution::None => f.write_str("NONE"),
        }
    }
}

const RULES: [(RelationshipKind, RelationshipRule); 10] = [
    (RelationshipKind::PaternalUncle, paternal_uncles),
    (RelationshipKind::MaternalUncle, maternal_uncles),
    (RelationshipKind::PaternalAunt, paternal_aunts),
    (RelationshipKind::MaternalAunt, maternal_aunts),
    (RelationshipKind::SisterInLaw, sisters_in_law),
    (RelationshipKind::BrotherInLaw, brothers_in_law),
    (RelationshipKind::Son, sons),
    (RelationshipKind::Daughter, daughters),
    (RelationshipKind::Siblings, siblings),
    (RelationshipKind::None, nobody),
];

/// Rule registered for a relationship kind
pub fn rule_for(kind: RelationshipKind) -> RelationshipRule {
    RULES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, rule)| *rule)
        .unwrap_or(nobody)
}

/// Resolve the people related to `name` by `kind`
///
/// `PersonNotFound` when `name` is not in the tree, `None` when the rule
/// yields nobody, otherwise the candidates' names in rule order.
pub fn resolve(tree: &FamilyTree, name: &str, kind: RelationshipKind) -> Resolution {
    let Some(person) = find_person(tree, name).and_then(|id| tree.person(id).ok()) else {
        return Resolution::PersonNotFound;
    };

    let names: Vec<String> = rule_for(kind)(person)
        .into_iter()
        .map(|p| p.name().to_string())
        .collect();

    if names.is_empty() {
        Resolution::None
    } else {
        Resolution::Found(names)
    }
}

/// Resolve with the relationship given as a case-insensitive keyword
///
/// Unknown keywords resolve through the `None` kind.
pub fn resolve_str(tree: &FamilyTree, name: &str, relation: &str) -> Resolution {
    resolve(tree, name, RelationshipKind::parse(relation))
}

fn children_where<'a>(
    parent: PersonRef<'a>,
    sex: Option<Sex>,
    exclude: Option<&str>,
) -> Vec<PersonRef<'a>> {
    parent
        .children()
        .filter(|c| sex.map_or(true, |s| c.sex() == s))
        .filter(|c| exclude.map_or(true, |name| c.name() != name))
        .collect()
}

fn sons(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    children_where(person, Some(Sex::Male), None)
}

fn daughters(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    children_where(person, Some(Sex::Female), None)
}

fn siblings(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    match person.father() {
        Some(father) => children_where(father, None, Some(person.name())),
        None => Vec::new(),
    }
}

// Spouse's siblings when the spouse has a father, otherwise the spouses
// of the person's own siblings. The second branch reads every child of the
// father, so a married person whose spouse married in sees their own spouse.
fn in_laws(person: PersonRef<'_>, sex: Sex) -> Vec<PersonRef<'_>> {
    if let Some(spouse) = person.spouse() {
        if let Some(spouse_father) = spouse.father() {
            return children_where(spouse_father, Some(sex), Some(spouse.name()));
        }
    }

    match person.father() {
        Some(father) => father
            .children()
            .filter_map(|sibling| sibling.spouse())
            .filter(|spouse| spouse.sex() == sex)
            .collect(),
        None => Vec::new(),
    }
}

fn sisters_in_law(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    in_laws(person, Sex::Female)
}

fn brothers_in_law(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    in_laws(person, Sex::Male)
}

// Grandfather's children of the given sex, minus the parent themselves
fn parents_siblings<'a>(parent: Option<PersonRef<'a>>, sex: Sex) -> Vec<PersonRef<'a>> {
    let Some(parent) = parent else {
        return Vec::new();
    };
    match parent.father() {
        Some(grandfather) => children_where(grandfather, Some(sex), Some(parent.name())),
        None => Vec::new(),
    }
}

fn paternal_uncles(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    parents_siblings(person.father(), Sex::Male)
}

fn paternal_aunts(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    parents_siblings(person.father(), Sex::Female)
}

// The mother is the father's spouse; without a father there is no mother
fn maternal_uncles(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    parents_siblings(person.mother(), Sex::Male)
}

fn maternal_aunts(person: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    parents_siblings(person.mother(), Sex::Female)
}

fn nobody(_: PersonRef<'_>) -> Vec<PersonRef<'_>> {
    Vec::new()
}
