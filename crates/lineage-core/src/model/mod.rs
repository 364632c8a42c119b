pub mod person;
pub mod relationship;
pub mod sex;
pub mod union;

pub use person::{Person, PersonId};
pub use relationship::RelationshipKind;
pub use sex::Sex;
pub use union::{Union, UnionId};
