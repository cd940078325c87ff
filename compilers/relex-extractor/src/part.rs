use relex_graph::{DependencyGraph, Interval, NodeSet};
use std::fmt;

/// A span of an extraction: its nodes, their rendering and their interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    nodes: NodeSet,
    text: String,
    span: Interval,
}

impl Part {
    /// Render the nodes in reading order.
    pub fn from_nodes(graph: &DependencyGraph, nodes: NodeSet) -> Self {
        let text = graph.text_of(&nodes);
        Self::with_text(graph, nodes, text)
    }

    /// Keep a rendering computed elsewhere (the relation expander renders
    /// group by group).
    pub fn with_text(graph: &DependencyGraph, nodes: NodeSet, text: String) -> Self {
        let span = graph.span_of(&nodes);
        Self { nodes, text, span }
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Interval {
        self.span
    }

    /// Same nodes, different rendering.
    pub fn retext(&self, text: impl Into<String>) -> Self {
        Self {
            nodes: self.nodes.clone(),
            text: text.into(),
            span: self.span,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A subordinate clause hanging off the relation ("X said that *Mary left*").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClausalComponent {
    pub rel: Part,
    pub arg: Part,
}

impl ClausalComponent {
    pub fn new(rel: Part, arg: Part) -> Self {
        Self { rel, arg }
    }

    pub fn text(&self) -> String {
        format!("{} {}", self.arg.text(), self.rel.text())
    }
}

/// An adverbial clause subtree attached to the relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdverbialModifier {
    pub clause: Part,
}

impl AdverbialModifier {
    pub fn new(clause: Part) -> Self {
        Self { clause }
    }

    pub fn text(&self) -> &str {
        self.clause.text()
    }
}
