use relex_graph::{DependencyGraph, NodeId, NodeSet};
use relex_pattern::Pattern;
use tracing::debug;

use crate::argument::expand_argument;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::part::{ClausalComponent, Part};
use crate::relation::expand_relation;

/// Role bound to the clause's own predicate.
pub const CLAUSE_REL: &str = "rel";
/// Role bound to the clause's subject.
pub const CLAUSE_ARG: &str = "arg";

/// Finds a complement clause ("that Mary left") governed by a relation.
#[derive(Debug, Clone)]
pub struct ClauseDetector {
    pattern: Pattern,
}

impl ClauseDetector {
    pub fn new(pattern: Pattern) -> Result<Self, ExtractError> {
        let binds = |role: &str| pattern.roles().any(|r| r == role);
        if !binds(CLAUSE_REL) || !binds(CLAUSE_ARG) {
            return Err(ExtractError::ClauseRoles {
                pattern: pattern.as_str().to_string(),
            });
        }
        Ok(Self { pattern })
    }

    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractError> {
        Self::new(Pattern::compile(&config.clause_pattern)?)
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The clause under `node`, if the pattern matches there exactly once.
    /// Nodes in `exclude` are already claimed by the extraction.
    pub fn detect(
        &self,
        graph: &DependencyGraph,
        node: NodeId,
        exclude: &NodeSet,
        config: &ExtractorConfig,
    ) -> Option<ClausalComponent> {
        let matches = self.pattern.apply_at(graph, node);
        let found = match matches.as_slice() {
            [only] => only,
            [] => return None,
            _ => {
                debug!(node = %node, matches = matches.len(), "ambiguous clause attachment");
                return None;
            }
        };

        let rel = found.get(CLAUSE_REL)?;
        let arg = found.get(CLAUSE_ARG)?;

        let mut until = exclude.clone();
        until.insert(arg);
        let rel_part = expand_relation(graph, rel, &until, config);

        let mut until = exclude.clone();
        until.insert(rel);
        let arg_nodes = expand_argument(graph, arg, &until, config);

        Some(ClausalComponent::new(rel_part, Part::from_nodes(graph, arg_nodes)))
    }
}
