use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::SentenceId;
use crate::interval::Interval;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One token (or multi-token unit) as delivered by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NodeData {
    pub text: String,
    pub postag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lemma: Option<String>,
    /// First token position covered by the node.
    pub start: u32,
    /// One past the last token position covered by the node.
    pub end: u32,
}

impl NodeData {
    pub fn interval(&self) -> Interval {
        Interval::open(self.start, self.end)
    }
}

/// A labeled governor -> dependent arc. Endpoints index `SentenceGraph::nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct EdgeData {
    pub governor: u32,
    pub dependent: u32,
    pub label: String,
}

/// A parsed sentence in plain-data form, ready to be archived or loaded
/// into a queryable graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SentenceGraph {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: SentenceId,
    pub nodes: Vec<NodeData>,
    pub edges: Vec<EdgeData>,
}

impl SentenceGraph {
    pub fn builder() -> SentenceBuilder {
        SentenceBuilder::default()
    }
}

/// Incremental construction of a `SentenceGraph`, one token per call.
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    graph: SentenceGraph,
}

impl SentenceBuilder {
    pub fn id(mut self, id: SentenceId) -> Self {
        self.graph.id = id;
        self
    }

    /// Append a single-token node at the next position.
    pub fn token(mut self, text: &str, postag: &str) -> Self {
        let position = self.graph.nodes.last().map(|n| n.end).unwrap_or(0);
        self.graph.nodes.push(NodeData {
            text: text.to_string(),
            postag: postag.to_string(),
            lemma: None,
            start: position,
            end: position + 1,
        });
        self
    }

    /// Append a single-token node that carries its own lemma.
    pub fn lemma_token(self, text: &str, postag: &str, lemma: &str) -> Self {
        let mut this = self.token(text, postag);
        if let Some(last) = this.graph.nodes.last_mut() {
            last.lemma = Some(lemma.to_string());
        }
        this
    }

    pub fn edge(mut self, governor: u32, dependent: u32, label: &str) -> Self {
        self.graph.edges.push(EdgeData {
            governor,
            dependent,
            label: label.to_string(),
        });
        self
    }

    pub fn build(self) -> SentenceGraph {
        self.graph
    }
}
