use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};
use petgraph::visit::{Dfs, EdgeFiltered, EdgeRef as _};
use petgraph::Direction as Orientation;
use relex_protocol::{Interval, NodeId, SentenceGraph, SentenceId};
use std::collections::{BTreeSet, VecDeque};
use std::ops::Index;

use crate::error::GraphError;
use crate::node::{DirectedEdge, Direction, EdgeRef, Node};

/// Duplicate-free node set. Iteration follows reading order because node
/// ids are assigned by token position.
pub type NodeSet = BTreeSet<NodeId>;

fn ix(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.index())
}

fn nid(index: NodeIndex) -> NodeId {
    NodeId::new(index.index() as u32)
}

fn edge_ref(e: EdgeReference<'_, String>) -> EdgeRef<'_> {
    EdgeRef {
        governor: nid(e.source()),
        dependent: nid(e.target()),
        label: e.weight().as_str(),
    }
}

/// Immutable dependency parse of one sentence.
///
/// Nodes live in a petgraph arena; edges point from governor to dependent
/// and carry their label. Nothing in the extractor mutates a graph after
/// construction, so a graph can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    id: SentenceId,
    graph: DiGraph<Node, String>,
}

impl DependencyGraph {
    /// Load a parsed sentence. Nodes are renumbered into reading order.
    pub fn from_sentence(sentence: &SentenceGraph) -> Result<Self, GraphError> {
        let count = sentence.nodes.len();

        // 1. Every node must cover at least one token
        for (index, node) in sentence.nodes.iter().enumerate() {
            if node.interval().is_empty() {
                return Err(GraphError::EmptyNode {
                    index,
                    text: node.text.clone(),
                });
            }
        }

        // 2. Sort by position and reject overlapping units
        let mut order: Vec<usize> = (0..count).collect();
        order.sort_by_key(|&i| sentence.nodes[i].interval());
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if sentence.nodes[a].interval().intersects(&sentence.nodes[b].interval()) {
                return Err(GraphError::OverlappingNodes { first: a, second: b });
            }
        }

        let mut remap = vec![NodeIndex::end(); count];
        let mut graph = DiGraph::with_capacity(count, sentence.edges.len());
        for &old in &order {
            remap[old] = graph.add_node(Node::from(&sentence.nodes[old]));
        }

        // 3. Wire the arcs through the renumbering
        for (index, edge) in sentence.edges.iter().enumerate() {
            let lookup = |node: u32| {
                remap.get(node as usize).copied().ok_or_else(|| GraphError::DanglingEdge {
                    index,
                    label: edge.label.clone(),
                    node,
                    count,
                })
            };
            let governor = lookup(edge.governor)?;
            let dependent = lookup(edge.dependent)?;
            graph.add_edge(governor, dependent, edge.label.clone());
        }

        Ok(Self { id: sentence.id, graph })
    }

    pub fn id(&self) -> SentenceId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.graph.node_weight(ix(id))
    }

    /// All nodes in reading order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.graph.node_indices().map(move |i| (nid(i), &self.graph[i]))
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.graph.edge_references().map(edge_ref)
    }

    /// Every arc touching `id`, outgoing arcs first.
    pub fn incident(&self, id: NodeId) -> impl Iterator<Item = DirectedEdge<'_>> + '_ {
        let down = self
            .graph
            .edges_directed(ix(id), Orientation::Outgoing)
            .map(|e| DirectedEdge { edge: edge_ref(e), dir: Direction::Down });
        let up = self
            .graph
            .edges_directed(ix(id), Orientation::Incoming)
            .map(|e| DirectedEdge { edge: edge_ref(e), dir: Direction::Up });
        down.chain(up)
    }

    /// Number of arcs touching `id` with the given label, in either direction.
    pub fn count_incident(&self, id: NodeId, label: &str) -> usize {
        self.incident(id).filter(|d| d.edge.label == label).count()
    }

    /// Nodes one step away from `id` across arcs accepted by `pred`.
    pub fn neighbors<F>(&self, id: NodeId, pred: F) -> NodeSet
    where
        F: Fn(&DirectedEdge<'_>) -> bool,
    {
        self.incident(id).filter(|d| pred(d)).map(|d| d.end()).collect()
    }

    /// Governors of `id` whose arc into it is accepted by `pred`.
    pub fn predecessors<F>(&self, id: NodeId, pred: F) -> NodeSet
    where
        F: Fn(&EdgeRef<'_>) -> bool,
    {
        self.graph
            .edges_directed(ix(id), Orientation::Incoming)
            .map(edge_ref)
            .filter(|e| pred(e))
            .map(|e| e.governor)
            .collect()
    }

    /// Nodes reachable from `id` (inclusive) when arcs accepted by `pred`
    /// may be walked in either direction.
    pub fn connected<F>(&self, id: NodeId, pred: F) -> NodeSet
    where
        F: Fn(&DirectedEdge<'_>) -> bool,
    {
        let mut seen = NodeSet::new();
        let mut queue = VecDeque::from([id]);

        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            for step in self.incident(current).filter(|d| pred(d)) {
                if !seen.contains(&step.end()) {
                    queue.push_back(step.end());
                }
            }
        }

        seen
    }

    /// Downward closure of `id` (inclusive) across arcs accepted by `pred`.
    pub fn inferiors<F>(&self, id: NodeId, pred: F) -> NodeSet
    where
        F: Fn(&EdgeRef<'_>) -> bool,
    {
        let filtered = EdgeFiltered::from_fn(&self.graph, |e: EdgeReference<'_, String>| pred(&edge_ref(e)));
        let mut dfs = Dfs::new(&filtered, ix(id));
        let mut found = NodeSet::new();
        while let Some(next) = dfs.next(&filtered) {
            found.insert(nid(next));
        }
        found
    }

    /// The full subtree under `id`, including `id`.
    pub fn all_inferiors(&self, id: NodeId) -> NodeSet {
        self.inferiors(id, |_| true)
    }

    /// Union interval of the given nodes.
    pub fn span_of<'a, I>(&self, nodes: I) -> Interval
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        Interval::span(nodes.into_iter().filter_map(|&n| self.get(n)).map(|n| n.indices))
    }

    /// Every node whose tokens fall inside `span`.
    pub fn nodes_within(&self, span: Interval) -> NodeSet {
        self.nodes()
            .filter(|(_, node)| span.superset(&node.indices))
            .map(|(id, _)| id)
            .collect()
    }

    /// Node texts joined by single spaces, in reading order.
    pub fn text_of<'a, I>(&self, nodes: I) -> String
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let words: Vec<&str> = nodes
            .into_iter()
            .filter_map(|&n| self.get(n))
            .map(|n| n.text.as_str())
            .collect();
        words.join(" ")
    }
}

impl Index<NodeId> for DependencyGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.graph[ix(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relex_protocol::labels;

    fn ids(raw: &[u32]) -> NodeSet {
        raw.iter().map(|&i| NodeId::new(i)).collect()
    }

    // "John eats red apples quickly"
    fn sample() -> DependencyGraph {
        let sentence = SentenceGraph::builder()
            .token("John", "NNP")
            .token("eats", "VBZ")
            .token("red", "JJ")
            .token("apples", "NNS")
            .token("quickly", "RB")
            .edge(1, 0, labels::NSUBJ)
            .edge(1, 3, labels::DOBJ)
            .edge(3, 2, labels::AMOD)
            .edge(1, 4, labels::ADVMOD)
            .build();
        DependencyGraph::from_sentence(&sentence).unwrap()
    }

    #[test]
    fn test_adjacency_queries() {
        let g = sample();
        let eats = NodeId::new(1);
        let apples = NodeId::new(3);

        let down = g.neighbors(eats, |d| d.dir == Direction::Down);
        assert_eq!(down, ids(&[0, 3, 4]));

        let objects = g.neighbors(eats, |d| d.edge.label == labels::DOBJ);
        assert_eq!(objects, ids(&[3]));

        assert_eq!(g.predecessors(apples, |e| e.label == labels::DOBJ), ids(&[1]));
        assert!(g.predecessors(eats, |_| true).is_empty());
        assert_eq!(g.count_incident(apples, labels::DOBJ), 1);
    }

    #[test]
    fn test_inferiors_respect_filter() {
        let g = sample();
        let eats = NodeId::new(1);

        assert_eq!(g.all_inferiors(eats), ids(&[0, 1, 2, 3, 4]));
        assert_eq!(g.inferiors(eats, |e| e.label == labels::DOBJ), ids(&[1, 3]));
        // The start node is always included
        assert_eq!(g.inferiors(eats, |_| false), ids(&[1]));
    }

    #[test]
    fn test_connected_walks_both_directions() {
        let sentence = SentenceGraph::builder()
            .token("meat", "NN")
            .token("and", "CC")
            .token("cheese", "NN")
            .token("or", "CC")
            .token("bread", "NN")
            .edge(0, 2, labels::CONJ_AND)
            .edge(0, 1, labels::CC)
            .edge(2, 4, labels::CONJ_OR)
            .edge(2, 3, labels::CC)
            .build();
        let g = DependencyGraph::from_sentence(&sentence).unwrap();

        let conj = |d: &DirectedEdge<'_>| d.edge.label.starts_with("conj_");
        assert_eq!(g.connected(NodeId::new(4), conj), ids(&[0, 2, 4]));
        assert_eq!(g.connected(NodeId::new(1), conj), ids(&[1]));
    }

    #[test]
    fn test_span_and_redensify() {
        let g = sample();
        let span = g.span_of(&ids(&[0, 3]));
        assert_eq!(span, Interval::open(0, 4));
        assert_eq!(g.nodes_within(span), ids(&[0, 1, 2, 3]));
        assert_eq!(g.text_of(&ids(&[3, 2])), "red apples");
    }

    #[test]
    fn test_nodes_are_renumbered_in_reading_order() {
        let mut sentence = SentenceGraph::builder()
            .token("eats", "VBZ")
            .token("John", "NNP")
            .edge(0, 1, labels::NSUBJ)
            .build();
        // Swap positions: "John" now comes first
        sentence.nodes[0].start = 1;
        sentence.nodes[0].end = 2;
        sentence.nodes[1].start = 0;
        sentence.nodes[1].end = 1;

        let g = DependencyGraph::from_sentence(&sentence).unwrap();
        assert_eq!(g[NodeId::new(0)].text, "John");
        assert_eq!(g.predecessors(NodeId::new(0), |_| true), ids(&[1]));
    }

    #[test]
    fn test_invalid_sentences() {
        let dangling = SentenceGraph::builder()
            .token("John", "NNP")
            .edge(0, 5, labels::NSUBJ)
            .build();
        assert!(matches!(
            DependencyGraph::from_sentence(&dangling),
            Err(GraphError::DanglingEdge { node: 5, .. })
        ));

        let mut overlapping = SentenceGraph::builder().token("New", "NNP").token("York", "NNP").build();
        overlapping.nodes[1].start = 0;
        assert!(matches!(
            DependencyGraph::from_sentence(&overlapping),
            Err(GraphError::OverlappingNodes { .. })
        ));
    }
}
