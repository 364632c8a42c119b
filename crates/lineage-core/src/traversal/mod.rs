//! Read-only walks over the family tree

pub mod lineage;
pub mod locate;

pub use lineage::ancestry;
pub use locate::{find_person, find_person_from};
