use relex_graph::NodeId;
use relex_pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The caller handed over a match that cannot describe a relation.
    #[error("role match {found} has no {role} role")]
    MissingRole { role: &'static str, found: String },

    /// A role is bound to a node the graph does not have.
    #[error("role {role} is bound to node {node}, which is not in the graph")]
    UnknownNode { role: String, node: NodeId },

    #[error("invalid clause pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("clause pattern {pattern:?} must bind both `rel` and `arg`")]
    ClauseRoles { pattern: String },

    #[error("invalid extractor configuration: {0}")]
    Config(#[from] serde_json::Error),
}
