use relex_protocol::{Interval, NodeData, NodeId, PosFlags};

/// A token of the parsed sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub postag: String,
    /// Lemma supplied by the parser, if any.
    pub lemma: Option<String>,
    pub indices: Interval,
    pub class: PosFlags,
}

impl Node {
    pub fn new(text: &str, postag: &str, indices: Interval) -> Self {
        Self {
            text: text.to_string(),
            postag: postag.to_string(),
            lemma: None,
            indices,
            class: PosFlags::from_penn(postag),
        }
    }

    pub fn is_proper_noun(&self) -> bool {
        self.class.contains(PosFlags::PROPER_NOUN)
    }

    pub fn is_adverb(&self) -> bool {
        self.class.contains(PosFlags::ADVERB)
    }

    pub fn is_wh_pronoun(&self) -> bool {
        self.class.contains(PosFlags::WH_PRONOUN)
    }
}

impl From<&NodeData> for Node {
    fn from(data: &NodeData) -> Self {
        Self {
            lemma: data.lemma.clone(),
            ..Node::new(&data.text, &data.postag, data.interval())
        }
    }
}

/// Which way an edge points relative to the node it was reached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From governor to dependent.
    Down,
    /// From dependent to governor.
    Up,
}

/// Borrowed view of a labeled arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'g> {
    pub governor: NodeId,
    pub dependent: NodeId,
    pub label: &'g str,
}

impl<'g> EdgeRef<'g> {
    pub fn to_dependency(&self) -> Dependency {
        Dependency {
            governor: self.governor,
            dependent: self.dependent,
            label: self.label.to_string(),
        }
    }
}

/// An arc as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedEdge<'g> {
    pub edge: EdgeRef<'g>,
    pub dir: Direction,
}

impl<'g> DirectedEdge<'g> {
    /// The endpoint the edge leads to.
    pub fn end(&self) -> NodeId {
        match self.dir {
            Direction::Down => self.edge.dependent,
            Direction::Up => self.edge.governor,
        }
    }
}

/// Owned copy of an arc, kept by role matches after the graph borrow ends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub governor: NodeId,
    pub dependent: NodeId,
    pub label: String,
}
