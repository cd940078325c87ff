use regex::Regex;
use relex_graph::{Dependency, DependencyGraph, Direction, Node, NodeId, RoleMatch};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::parser::{parse_pattern, RawNode, RawValue};

/// How a constraint compares a node attribute.
#[derive(Debug, Clone)]
pub enum ValueMatcher {
    Exact(String),
    Regex(Regex),
}

impl ValueMatcher {
    fn compile(raw: &RawValue<'_>) -> Result<Self, PatternError> {
        Ok(match raw {
            RawValue::Exact(v) => ValueMatcher::Exact(v.to_string()),
            // Anchor so /VB.*/ means "starts with VB", not "contains VB"
            RawValue::Regex(r) => ValueMatcher::Regex(Regex::new(&format!("^(?:{})$", r))?),
        })
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            ValueMatcher::Exact(v) => v == value,
            ValueMatcher::Regex(r) => r.is_match(value),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    PosTag(ValueMatcher),
    Text(ValueMatcher),
    /// Compared against the parser lemma, or the lowercased text when the
    /// parser supplied none.
    Lemma(ValueMatcher),
}

impl Constraint {
    pub fn accepts(&self, node: &Node) -> bool {
        match self {
            Constraint::PosTag(m) => m.accepts(&node.postag),
            Constraint::Text(m) => m.accepts(&node.text),
            Constraint::Lemma(m) => match &node.lemma {
                Some(lemma) => m.accepts(lemma),
                None => m.accepts(&node.text.to_lowercase()),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeMatcher {
    pub role: String,
    pub constraints: Vec<Constraint>,
}

impl NodeMatcher {
    fn compile(raw: &RawNode<'_>) -> Result<Self, PatternError> {
        let mut constraints = Vec::with_capacity(raw.constraints.len());
        for (key, value) in &raw.constraints {
            let matcher = ValueMatcher::compile(value)?;
            constraints.push(match *key {
                "postag" => Constraint::PosTag(matcher),
                "text" => Constraint::Text(matcher),
                "lemma" => Constraint::Lemma(matcher),
                other => {
                    return Err(PatternError::UnknownConstraint {
                        role: raw.role.to_string(),
                        key: other.to_string(),
                    })
                }
            });
        }
        Ok(Self {
            role: raw.role.to_string(),
            constraints,
        })
    }

    pub fn accepts(&self, node: &Node) -> bool {
        self.constraints.iter().all(|c| c.accepts(node))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMatcher {
    pub direction: Direction,
    pub labels: Vec<String>,
}

impl EdgeMatcher {
    pub fn accepts(&self, direction: Direction, label: &str) -> bool {
        self.direction == direction && self.labels.iter().any(|l| l == label)
    }
}

/// A compiled chain pattern such as
/// `{arg1} <nsubj< {rel:postag=/VB.*/} >dobj> {arg2}`.
///
/// Each `{role}` binds one node; each arc step walks from the previously
/// bound node. A node is bound at most once per match.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    nodes: Vec<NodeMatcher>,
    edges: Vec<EdgeMatcher>,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        if source.trim().is_empty() {
            return Err(PatternError::Empty);
        }

        let (_, raw) = parse_pattern(source).map_err(|e| {
            let offset = match &e {
                nom::Err::Error(inner) | nom::Err::Failure(inner) => source.len() - inner.input.len(),
                nom::Err::Incomplete(_) => source.len(),
            };
            PatternError::Syntax {
                pattern: source.to_string(),
                offset,
            }
        })?;

        let mut nodes: Vec<NodeMatcher> = Vec::with_capacity(raw.nodes.len());
        for raw_node in &raw.nodes {
            if nodes.iter().any(|n| n.role == raw_node.role) {
                return Err(PatternError::DuplicateRole(raw_node.role.to_string()));
            }
            nodes.push(NodeMatcher::compile(raw_node)?);
        }

        let edges = raw
            .edges
            .iter()
            .map(|e| EdgeMatcher {
                direction: e.direction,
                labels: e.labels.iter().map(|l| l.to_string()).collect(),
            })
            .collect();

        Ok(Self {
            source: source.trim().to_string(),
            nodes,
            edges,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.role.as_str())
    }

    /// All matches whose first role binds any node of the graph.
    pub fn apply(&self, graph: &DependencyGraph) -> Vec<RoleMatch> {
        graph
            .nodes()
            .flat_map(|(id, _)| self.apply_at(graph, id))
            .collect()
    }

    /// All matches whose first role binds `anchor`.
    pub fn apply_at(&self, graph: &DependencyGraph, anchor: NodeId) -> Vec<RoleMatch> {
        let mut results = Vec::new();
        let accepted = graph.get(anchor).map(|n| self.nodes[0].accepts(n)).unwrap_or(false);
        if accepted {
            let mut bound = vec![anchor];
            let mut path = Vec::new();
            self.extend(graph, &mut bound, &mut path, &mut results);
        }
        results
    }

    /// Depth-first search over the remaining steps.
    fn extend(
        &self,
        graph: &DependencyGraph,
        bound: &mut Vec<NodeId>,
        path: &mut Vec<Dependency>,
        results: &mut Vec<RoleMatch>,
    ) {
        let step = bound.len();
        if step == self.nodes.len() {
            let groups: BTreeMap<String, NodeId> = self
                .nodes
                .iter()
                .zip(bound.iter())
                .map(|(matcher, &node)| (matcher.role.clone(), node))
                .collect();
            results.push(RoleMatch::new(groups, path.clone()));
            return;
        }

        let from = bound[step - 1];
        let edge = &self.edges[step - 1];
        let target = &self.nodes[step];

        for d in graph.incident(from) {
            if !edge.accepts(d.dir, d.edge.label) {
                continue;
            }
            let next = d.end();
            if bound.contains(&next) || !target.accepts(&graph[next]) {
                continue;
            }

            bound.push(next);
            path.push(d.edge.to_dependency());
            self.extend(graph, bound, path, results);
            path.pop();
            bound.pop();
        }
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::compile(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
