pub mod error;
pub mod graph;
pub mod node;
pub mod role;

pub use error::GraphError;
pub use graph::{DependencyGraph, NodeSet};
pub use node::{Dependency, DirectedEdge, Direction, EdgeRef, Node};
pub use role::RoleMatch;
pub use relex_protocol::{Interval, NodeId, PosFlags, SentenceGraph, SentenceId};
