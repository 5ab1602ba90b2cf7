pub mod action;
pub mod array;

pub use action::Action;
pub use array::{TrackedArray, MISSING};
