//! Property tests: any sequence of births and marriages keeps the tree
//! structurally sound and every person findable.

use lineage_core::ops::person_ops::add_child_to_mother;
use lineage_core::rules::{invariants, validate_tree};
use lineage_core::traversal::find_person;
use lineage_core::{apply, resolve, FamilyTree, RelationshipKind, Sex, TreeEvent};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Marry(usize),
    Child(usize, Sex),
    ChildViaMother(usize, Sex),
}

fn arb_sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female), Just(Sex::Other)]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<usize>().prop_map(Step::Marry),
        (any::<usize>(), arb_sex()).prop_map(|(p, s)| Step::Child(p, s)),
        (any::<usize>(), arb_sex()).prop_map(|(p, s)| Step::ChildViaMother(p, s)),
    ]
}

// Steps pick an existing person by index; failures are expected and ignored
fn grow(root_sex: Sex, steps: &[Step]) -> FamilyTree {
    let mut tree = FamilyTree::new();
    apply(
        &mut tree,
        TreeEvent::CreateRoot {
            name: "P0".to_string(),
            sex: root_sex,
        },
    )
    .unwrap();

    for (i, step) in steps.iter().enumerate() {
        let fresh = format!("P{}", i + 1);
        let pick = |n: usize| tree.iter().nth(n % tree.len()).unwrap().name.clone();
        match step {
            Step::Marry(n) => {
                let person = pick(*n);
                let _ = apply(
                    &mut tree,
                    TreeEvent::Marry {
                        person,
                        spouse: fresh,
                    },
                );
            }
            Step::Child(n, sex) => {
                let parent = pick(*n);
                let _ = apply(
                    &mut tree,
                    TreeEvent::AddChild {
                        parent,
                        child: fresh,
                        sex: *sex,
                    },
                );
            }
            Step::ChildViaMother(n, sex) => {
                let mother = pick(*n);
                add_child_to_mother(&mut tree, &mother, &fresh, *sex);
            }
        }
    }
    tree
}

proptest! {
    #[test]
    fn random_growth_keeps_tree_valid(
        root_sex in arb_sex(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let tree = grow(root_sex, &steps);

        prop_assert!(validate_tree(&tree).is_ok());
        prop_assert!(invariants::find_unreachable_people(&tree).is_empty());
    }

    #[test]
    fn every_person_is_findable_by_name(
        root_sex in arb_sex(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let tree = grow(root_sex, &steps);

        for person in tree.iter() {
            prop_assert_eq!(find_person(&tree, &person.name), Some(person.id));
        }
    }

    #[test]
    fn spouses_share_one_children_list(
        root_sex in arb_sex(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let tree = grow(root_sex, &steps);

        for person in tree.iter() {
            if let Some(spouse) = person.spouse {
                prop_assert_eq!(tree.children_of(person.id), tree.children_of(spouse));
            }
        }
    }

    #[test]
    fn siblings_never_include_self(
        root_sex in arb_sex(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let tree = grow(root_sex, &steps);

        for person in tree.iter() {
            let result = resolve(&tree, &person.name, RelationshipKind::Siblings);
            prop_assert!(!result.names().contains(&person.name));
        }
    }

    #[test]
    fn none_kind_always_resolves_to_none(
        steps in prop::collection::vec(arb_step(), 0..30),
    ) {
        let tree = grow(Sex::Male, &steps);

        for person in tree.iter() {
            prop_assert_eq!(
                resolve(&tree, &person.name, RelationshipKind::None).to_string(),
                "NONE"
            );
        }
    }
}
