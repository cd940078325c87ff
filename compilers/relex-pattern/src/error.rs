use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("syntax error in pattern {pattern:?} at offset {offset}")]
    Syntax { pattern: String, offset: usize },

    #[error("role {0:?} is bound twice")]
    DuplicateRole(String),

    #[error("unknown constraint {key:?} on role {role:?}")]
    UnknownConstraint { role: String, key: String },

    #[error("invalid regex in pattern: {0}")]
    Regex(#[from] regex::Error),
}
