#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{first_generation, marry};
use lineage_core::ops::person_ops::{add_child, add_child_to_mother};
use lineage_core::{resolve_str, ChildAdditionOutcome, RelationshipKind, Resolution, Sex};

#[test]
fn test_scenario_a_sons_of_root() {
    // GIVEN the root with five children, the last of them female
    let tree = first_generation();

    // WHEN resolving the root's sons
    let result = lineage_core::resolve(&tree, "King Shan", RelationshipKind::Son);

    // THEN the four sons come back in birth order
    assert_eq!(result.to_string(), "Chit Ish Vich Aras");
}

#[test]
fn test_scenario_b_siblings_exclude_self() {
    // GIVEN Chit married to Amba
    let mut tree = first_generation();
    marry(&mut tree, "Chit", "Amba");

    // WHEN resolving Chit's siblings
    let result = resolve_str(&tree, "Chit", "siblings");

    // THEN every other child of King Shan is listed
    assert_eq!(result.to_string(), "Ish Vich Aras Satya");
}

#[test]
fn test_scenario_c_no_paternal_uncle() {
    // GIVEN a child of Chit, whose father has brothers
    let mut tree = first_generation();
    marry(&mut tree, "Chit", "Amba");
    add_child(&mut tree, "Chit", "Dritha".to_string(), Sex::Female).unwrap();

    // WHEN resolving Dritha's paternal uncles
    let result = resolve_str(&tree, "Dritha", "paternal-uncle");

    // THEN Chit's brothers are listed
    assert_eq!(result.to_string(), "Ish Vich Aras");

    // AND a grandchild of an only child has none
    let mut lone = common::tree_with_root("Chit", Sex::Male);
    marry(&mut lone, "Chit", "Amba");
    add_child(&mut lone, "Chit", "Dritha".to_string(), Sex::Female).unwrap();
    assert_eq!(resolve_str(&lone, "Dritha", "paternal-uncle"), Resolution::None);
    assert_eq!(resolve_str(&lone, "Dritha", "paternal-uncle").to_string(), "NONE");
}

#[test]
fn test_scenario_d_add_child_through_mother() {
    // GIVEN Amba, Chit's wife
    let mut tree = first_generation();
    marry(&mut tree, "Chit", "Amba");

    // WHEN adding Tritha through her mother
    let outcome = add_child_to_mother(&mut tree, "Amba", "Tritha", Sex::Female);

    // THEN the addition succeeds and Tritha is Amba's daughter
    assert_eq!(outcome, ChildAdditionOutcome::ChildAdditionSucceeded);
    assert!(resolve_str(&tree, "Amba", "daughter")
        .names()
        .contains(&"Tritha".to_string()));

    // AND Chit sees the same child
    assert_eq!(resolve_str(&tree, "Chit", "daughter").to_string(), "Tritha");
}

#[test]
fn test_scenario_e_unknown_person() {
    let tree = first_generation();

    let result = resolve_str(&tree, "Pjali", "son");

    assert_eq!(result, Resolution::PersonNotFound);
    assert_eq!(result.to_string(), "PERSON_NOT_FOUND");
}

#[test]
fn test_scenario_e_add_child_to_unknown_mother() {
    let mut tree = first_generation();
    let before = tree.len();

    let outcome = add_child_to_mother(&mut tree, "Pjali", "Srutak", Sex::Male);

    assert_eq!(outcome, ChildAdditionOutcome::PersonNotFound);
    assert_eq!(tree.len(), before);
}

#[test]
fn test_add_child_to_male_fails_without_mutation() {
    // GIVEN King Shan, who is male
    let mut tree = first_generation();
    let before = tree.len();

    // WHEN adding a child through him as the mother
    let outcome = add_child_to_mother(&mut tree, "King Shan", "Vani", Sex::Female);

    // THEN the addition fails and the tree is untouched
    assert_eq!(outcome, ChildAdditionOutcome::ChildAdditionFailed);
    assert_eq!(tree.len(), before);
    assert_eq!(resolve_str(&tree, "Vani", "siblings"), Resolution::PersonNotFound);
}
