pub mod person_ops;
pub mod person_ref;
pub mod tree;

pub use person_ops::ChildAdditionOutcome;
pub use person_ref::PersonRef;
pub use tree::FamilyTree;
