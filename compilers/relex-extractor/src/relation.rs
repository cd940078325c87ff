use relex_graph::{DependencyGraph, EdgeRef, NodeId, NodeSet};
use std::collections::BTreeSet;
use tracing::trace;

use crate::config::ExtractorConfig;
use crate::expand::{augment, components, expand_labels};
use crate::part::Part;

/// Grow a relation head into its predicate span: auxiliaries, copulas,
/// particles, plain adverbs and an unambiguous object clause.
///
/// The rendering is built group by group, each group in reading order and
/// groups ordered by span.
pub fn expand_relation(graph: &DependencyGraph, rel: NodeId, until: &NodeSet, config: &ExtractorConfig) -> Part {
    let eligible: BTreeSet<String> = config
        .object_labels
        .iter()
        .filter(|label| graph.count_incident(rel, label) == 1)
        .cloned()
        .collect();

    let attach = |e: &EdgeRef<'_>| e.dependent != rel && attaches(graph, rel, e, until, config);

    let nouns = expand_labels(graph, rel, until, &config.argument_labels);

    let copula = graph
        .predecessors(rel, |e| e.label == config.copula_label)
        .into_iter()
        .next()
        .map(|governor| augment(graph, governor, until, attach))
        .unwrap_or_default();

    let mut auxiliaries = augment(graph, rel, until, attach);
    auxiliaries.retain(|n| !nouns.contains(n));

    let mut groups = vec![copula, nouns, auxiliaries];
    if !eligible.is_empty() {
        groups.extend(components(graph, rel, &eligible, until, true));
    }

    groups.retain(|group| match group.len() {
        0 => false,
        1 => group.iter().all(|&n| !graph[n].is_wh_pronoun()),
        _ => true,
    });
    groups.sort_by_key(|group| graph.span_of(group));
    trace!(rel = %rel, groups = groups.len(), "expanded relation");

    let text = groups.iter().map(|g| graph.text_of(g)).collect::<Vec<_>>().join(" ");
    let nodes: NodeSet = groups.into_iter().flatten().collect();
    Part::with_text(graph, nodes, text)
}

/// Whether the arc `e` hangs a modal, copula, particle or adverb on the
/// predicate. An adverb separated from the relation head by a claimed node
/// belongs to that node's span, not the predicate.
fn attaches(graph: &DependencyGraph, rel: NodeId, e: &EdgeRef<'_>, until: &NodeSet, config: &ExtractorConfig) -> bool {
    if config.relation_attach_labels.contains(e.label) {
        return true;
    }
    if e.label != config.adverb_label || !graph[e.dependent].is_adverb() {
        return false;
    }
    let (low, high) = if e.dependent < rel { (e.dependent, rel) } else { (rel, e.dependent) };
    !until.iter().any(|&n| low < n && n < high)
}
