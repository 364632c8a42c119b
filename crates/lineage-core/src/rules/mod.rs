//! Structural invariants of a family tree

pub mod invariants;
pub mod validation;

pub use validation::validate_tree;
