use relex_graph::{DependencyGraph, NodeId, NodeSet};
use tracing::trace;

use crate::config::ExtractorConfig;
use crate::expand::{components, expand_labels, redensify};

/// Grow an argument head into the full argument span.
///
/// Nodes in `until` belong to other roles and are never entered. When the
/// head is coordinated ("meat and cheese"), every conjunct is expanded and
/// the result is widened to all nodes between the outermost conjuncts.
/// That widened span does not honor `until`: a claimed node lying inside
/// the coordination, or a claimed conjunct, is part of the result.
pub fn expand_argument(
    graph: &DependencyGraph,
    head: NodeId,
    until: &NodeSet,
    config: &ExtractorConfig,
) -> NodeSet {
    let conjuncts = graph.connected(head, |d| config.conjunction_labels.contains(d.edge.label));

    if conjuncts.len() == 1 {
        return expand_conjunct(graph, head, until, config);
    }

    trace!(head = %head, conjuncts = conjuncts.len(), "expanding coordinated argument");
    let flat: NodeSet = conjuncts
        .iter()
        .flat_map(|&c| expand_conjunct(graph, c, until, config))
        .collect();
    redensify(graph, &flat)
}

fn expand_conjunct(graph: &DependencyGraph, node: NodeId, until: &NodeSet, config: &ExtractorConfig) -> NodeSet {
    let mut expansion = expand_labels(graph, node, until, &config.argument_labels);

    // Named entities do not take clause attachments. The check looks at the
    // unrestricted modifier walk so it does not depend on `until`.
    let names_entity = expand_labels(graph, node, &NodeSet::new(), &config.argument_labels)
        .iter()
        .any(|&n| graph[n].is_proper_noun());
    if names_entity {
        return expansion;
    }

    for component in components(graph, node, &config.argument_clause_labels, until, false) {
        expansion.extend(component);
    }
    expansion
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use proptest::prelude::*;
    use relex_protocol::{labels, SentenceGraph};

    #[test]
    fn test_adjectival_modifier_is_pulled_in() {
        let g = john_eats_red_apples();
        let config = ExtractorConfig::default();

        let arg2 = expand_argument(&g, n(3), &set(&[1]), &config);
        assert_eq!(g.text_of(&arg2), "red apples");

        let arg1 = expand_argument(&g, n(0), &set(&[1]), &config);
        assert_eq!(arg1, set(&[0]));
    }

    #[test]
    fn test_until_nodes_are_never_entered() {
        let g = john_eats_red_apples();
        let config = ExtractorConfig::default();

        let arg2 = expand_argument(&g, n(3), &set(&[1, 2]), &config);
        assert_eq!(arg2, set(&[3]));
    }

    #[test]
    fn test_coordination_is_redensified() {
        let g = meat_and_cheese();
        let config = ExtractorConfig::default();

        // Either conjunct yields the whole coordination, including "and"
        for head in [2, 4] {
            let arg = expand_argument(&g, n(head), &set(&[1]), &config);
            assert_eq!(arg, set(&[2, 3, 4]));
            assert_eq!(g.text_of(&arg), "meat and cheese");
        }
    }

    #[test]
    fn test_coordination_span_covers_claimed_conjunct() {
        let g = meat_and_cheese();
        let config = ExtractorConfig::default();

        let arg = expand_argument(&g, n(2), &set(&[4]), &config);
        assert_eq!(arg, set(&[2, 3, 4]));
    }

    #[test]
    fn test_relative_clause_attaches_to_common_noun() {
        let g = the_man_who_left();
        let config = ExtractorConfig::default();

        let arg = expand_argument(&g, n(1), &set(&[4]), &config);
        assert_eq!(g.text_of(&arg), "the man who left");
    }

    #[test]
    fn test_proper_noun_suppresses_clause_attachment() {
        let g = mary_who_left();
        let config = ExtractorConfig::default();

        let arg = expand_argument(&g, n(0), &set(&[3]), &config);
        assert_eq!(arg, set(&[0]));
    }

    #[test]
    fn test_clause_containing_claimed_node_is_dropped() {
        let g = the_man_who_left();
        let config = ExtractorConfig::default();

        // "left" is claimed elsewhere, so the relative clause cannot attach
        let arg = expand_argument(&g, n(1), &set(&[3]), &config);
        assert_eq!(g.text_of(&arg), "the man");
    }

    const LABELS: &[&str] = &[
        labels::DET,
        labels::AMOD,
        labels::NN,
        labels::RCMOD,
        labels::PARTMOD,
        labels::CONJ_AND,
        labels::CONJ_OR,
        labels::CC,
        labels::NSUBJ,
        labels::DOBJ,
        labels::PREP_OF,
    ];
    const TAGS: &[&str] = &["NN", "NNP", "JJ", "DT", "VBD", "RB", "WP", "CC"];

    fn random_tree(shape: &[(usize, usize, usize)]) -> DependencyGraph {
        let mut builder = SentenceGraph::builder().token("w0", "NN");
        for (i, &(parent, label, tag)) in shape.iter().enumerate() {
            let dependent = (i + 1) as u32;
            let governor = (parent % (i + 1)) as u32;
            builder = builder
                .token(&format!("w{}", dependent), TAGS[tag % TAGS.len()])
                .edge(governor, dependent, LABELS[label % LABELS.len()]);
        }
        load(builder.build())
    }

    proptest! {
        #[test]
        fn test_expansion_is_idempotent(shape in proptest::collection::vec((0usize..64, 0usize..64, 0usize..64), 0..9)) {
            let g = random_tree(&shape);
            let config = ExtractorConfig::default();

            for (head, _) in g.nodes() {
                let expanded = expand_argument(&g, head, &NodeSet::new(), &config);
                prop_assert!(expanded.contains(&head));

                let again = expand_argument(&g, head, &expanded, &config);
                prop_assert!(again.is_subset(&expanded), "{:?} grew to {:?}", expanded, again);
            }
        }
    }
}
