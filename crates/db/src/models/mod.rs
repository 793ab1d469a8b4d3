pub mod edge;
pub mod family_tree;
pub mod node_position;
pub mod person;
pub mod relationship;
pub mod user;
