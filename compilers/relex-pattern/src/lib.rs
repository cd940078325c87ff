pub mod error;
pub mod parser;
pub mod pattern;

pub use error::PatternError;
pub use pattern::{Constraint, EdgeMatcher, NodeMatcher, Pattern, ValueMatcher};
