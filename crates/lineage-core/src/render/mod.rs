//! Plain-text rendering of people and trees

pub mod person_render;
pub mod tree_render;

pub use person_render::describe_person;
pub use tree_render::render_tree;
