use crate::errors::{FamilyError, Result};
use crate::model::PersonId;
use crate::ops::FamilyTree;

use super::invariants;

/// Validate the entire family tree
///
/// Runs every invariant check:
///
/// 1. Spouse links are mutual
/// 2. Married people are members of their union, paired with their spouse
/// 3. Every father is Male
/// 4. Father chains end at a fatherless person
///
/// An empty tree is valid.
///
/// # Errors
/// Returns the first violation found. Call the individual invariant
/// functions for an exhaustive report.
pub fn validate_tree(tree: &FamilyTree) -> Result<()> {
    let name_of = |id: PersonId| {
        tree.get_person(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|_| format!("#{}", id.0))
    };

    if let Some(id) = invariants::find_asymmetric_spouses(tree).first() {
        return Err(FamilyError::SpouseAsymmetry { name: name_of(*id) });
    }

    if let Some(id) = invariants::find_union_membership_mismatches(tree).first() {
        return Err(FamilyError::UnionMembershipMismatch { name: name_of(*id) });
    }

    if let Some((child, father)) = invariants::find_non_male_fathers(tree).first() {
        return Err(FamilyError::FatherNotMale {
            child: name_of(*child),
            father: name_of(*father),
        });
    }

    if let Some(id) = invariants::find_broken_father_chains(tree).first() {
        return Err(FamilyError::FatherChainBroken { name: name_of(*id) });
    }

    Ok(())
}
