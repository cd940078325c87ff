use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {index} ({label}) refers to node {node}, but the sentence has {count} nodes")]
    DanglingEdge {
        index: usize,
        label: String,
        node: u32,
        count: usize,
    },

    #[error("node {index} ({text:?}) covers no token positions")]
    EmptyNode { index: usize, text: String },

    #[error("nodes {first} and {second} cover overlapping token positions")]
    OverlappingNodes { first: usize, second: usize },
}
