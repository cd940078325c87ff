use relex_graph::{DependencyGraph, Direction, NodeId, NodeSet};

use crate::config::ExtractorConfig;
use crate::expand::redensify;
use crate::part::{AdverbialModifier, Part};

/// The adverbial clauses under `node`, merged into one modifier covering
/// their whole span.
pub fn detect_adverbial(graph: &DependencyGraph, node: NodeId, config: &ExtractorConfig) -> Option<AdverbialModifier> {
    let heads = graph.neighbors(node, |d| d.dir == Direction::Down && d.edge.label == config.adverbial_clause_label);
    if heads.is_empty() {
        return None;
    }

    let subtree: NodeSet = heads.iter().flat_map(|&h| graph.all_inferiors(h)).collect();
    let nodes = redensify(graph, &subtree);
    Some(AdverbialModifier::new(Part::from_nodes(graph, nodes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_adverbial_clause_subtree() {
        let g = john_left_when_mary_arrived();
        let config = ExtractorConfig::default();

        let modifier = detect_adverbial(&g, n(1), &config).unwrap();
        assert_eq!(modifier.text(), "when Mary arrived");
        assert_eq!(modifier.clause.nodes(), &set(&[2, 3, 4]));
    }

    #[test]
    fn test_plain_adverb_is_not_a_clause() {
        let g = john_eats_red_apples();
        let config = ExtractorConfig::default();

        assert!(detect_adverbial(&g, n(1), &config).is_none());
    }

    #[test]
    fn test_only_downward_arcs_count() {
        let g = john_left_when_mary_arrived();
        let config = ExtractorConfig::default();

        assert!(detect_adverbial(&g, n(4), &config).is_none());
    }
}
