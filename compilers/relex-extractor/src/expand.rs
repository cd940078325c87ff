//! Graph walks shared by the argument and relation expanders.

use relex_graph::{DependencyGraph, Direction, EdgeRef, NodeId, NodeSet};
use std::collections::BTreeSet;
use tracing::trace;

/// Downward closure of `node` across `labels`, never entering `until`.
pub(crate) fn expand_labels(
    graph: &DependencyGraph,
    node: NodeId,
    until: &NodeSet,
    labels: &BTreeSet<String>,
) -> NodeSet {
    graph.inferiors(node, |e| labels.contains(e.label) && !until.contains(&e.dependent))
}

/// One node set per downward neighbour of `node` across `labels`: the
/// neighbour's subtree, widened to every node inside its span.
///
/// The subtree never walks back into `node`. Unless `nested`, it also stops
/// at further arcs carrying one of `labels`. A component containing a node
/// of `without` is dropped whole.
pub(crate) fn components(
    graph: &DependencyGraph,
    node: NodeId,
    labels: &BTreeSet<String>,
    without: &NodeSet,
    nested: bool,
) -> Vec<NodeSet> {
    let across = graph.neighbors(node, |d| d.dir == Direction::Down && labels.contains(d.edge.label));

    across
        .into_iter()
        .filter_map(|start| {
            let inferiors =
                graph.inferiors(start, |e| e.dependent != node && (nested || !labels.contains(e.label)));
            if inferiors.iter().any(|n| without.contains(n)) {
                trace!(start = %start, "component overlaps claimed nodes");
                return None;
            }
            Some(redensify(graph, &inferiors))
        })
        .collect()
}

/// Nodes reached from `node` across arcs accepted by `pred`, minus `without`.
pub(crate) fn augment<F>(graph: &DependencyGraph, node: NodeId, without: &NodeSet, pred: F) -> NodeSet
where
    F: Fn(&EdgeRef<'_>) -> bool,
{
    let mut reached = graph.inferiors(node, |e| pred(e) && !without.contains(&e.dependent));
    reached.retain(|n| !without.contains(n));
    reached
}

/// Every graph node inside the span of `nodes`. Picks up tokens that sit
/// between members without hanging off any of them (commas, "and").
pub(crate) fn redensify(graph: &DependencyGraph, nodes: &NodeSet) -> NodeSet {
    graph.nodes_within(graph.span_of(nodes))
}
