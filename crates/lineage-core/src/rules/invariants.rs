use crate::model::PersonId;
use crate::ops::FamilyTree;
use crate::traversal::lineage::ancestry;

/// People whose spouse does not point back at them
pub fn find_asymmetric_spouses(tree: &FamilyTree) -> Vec<PersonId> {
    tree.iter()
        .filter(|person| match person.spouse {
            Some(spouse) => tree
                .get_person(spouse)
                .map_or(true, |s| s.spouse != Some(person.id)),
            None => false,
        })
        .map(|person| person.id)
        .collect()
}

/// Married people whose union is missing or does not list them
///
/// Also reports people with a union but no spouse.
pub fn find_union_membership_mismatches(tree: &FamilyTree) -> Vec<PersonId> {
    tree.iter()
        .filter(|person| match (person.spouse, person.union_id) {
            (None, None) => false,
            (Some(spouse), Some(union_id)) => tree.get_union(union_id).map_or(true, |union| {
                !union.contains(person.id) || union.partner_of(person.id) != Some(spouse)
            }),
            _ => true,
        })
        .map(|person| person.id)
        .collect()
}

/// Children whose father is not Male, as (child, father) pairs
pub fn find_non_male_fathers(tree: &FamilyTree) -> Vec<(PersonId, PersonId)> {
    tree.iter()
        .filter_map(|person| {
            let father = person.father?;
            match tree.get_person(father) {
                Ok(f) if f.is_male() => None,
                _ => Some((person.id, father)),
            }
        })
        .collect()
}

/// People whose father chain dangles or loops
pub fn find_broken_father_chains(tree: &FamilyTree) -> Vec<PersonId> {
    tree.iter()
        .filter(|person| ancestry(tree, person.id).is_err())
        .map(|person| person.id)
        .collect()
}

/// People that the root cannot reach through spouse and children links
pub fn find_unreachable_people(tree: &FamilyTree) -> Vec<PersonId> {
    let mut reached = vec![false; tree.len()];
    let mut stack: Vec<PersonId> = tree.root_id().into_iter().collect();

    while let Some(id) = stack.pop() {
        match reached.get_mut(id.0) {
            Some(seen) if !*seen => *seen = true,
            _ => continue,
        }
        if let Ok(person) = tree.get_person(id) {
            stack.extend(person.spouse);
        }
        stack.extend(tree.children_of(id).iter().copied());
    }

    tree.iter()
        .filter(|person| !reached[person.id.0])
        .map(|person| person.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::ops::person_ops::{add_child, create_root, marry_new_spouse};

    fn healthy() -> FamilyTree {
        let mut tree = FamilyTree::new();
        create_root(&mut tree, "Shan".to_string(), Sex::Male).unwrap();
        marry_new_spouse(&mut tree, "Shan", "Anga".to_string()).unwrap();
        add_child(&mut tree, "Anga", "Chit".to_string(), Sex::Male).unwrap();
        tree
    }

    #[test]
    fn test_healthy_tree_has_no_violations() {
        let tree = healthy();
        assert!(find_asymmetric_spouses(&tree).is_empty());
        assert!(find_union_membership_mismatches(&tree).is_empty());
        assert!(find_non_male_fathers(&tree).is_empty());
        assert!(find_broken_father_chains(&tree).is_empty());
        assert!(find_unreachable_people(&tree).is_empty());
    }

    #[test]
    fn test_detects_one_sided_spouse() {
        let mut tree = healthy();
        let loner = tree.insert_person("Loner".to_string(), Sex::Female);
        tree.get_person_mut(loner).unwrap().spouse = Some(PersonId(0));

        assert_eq!(find_asymmetric_spouses(&tree), vec![loner]);
        assert_eq!(find_union_membership_mismatches(&tree), vec![loner]);
        assert_eq!(find_unreachable_people(&tree), vec![loner]);
    }

    #[test]
    fn test_detects_female_father() {
        let mut tree = healthy();
        let chit = PersonId(2);
        tree.get_person_mut(chit).unwrap().father = Some(PersonId(1));

        assert_eq!(find_non_male_fathers(&tree), vec![(chit, PersonId(1))]);
    }
}
