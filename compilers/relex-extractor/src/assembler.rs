use relex_graph::role::{ARG1, ARG2, REL_PREFIX};
use relex_graph::{DependencyGraph, NodeId, NodeSet, RoleMatch};
use relex_morph::{Lemmatizer, RuleLemmatizer};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::adverbial::detect_adverbial;
use crate::argument::expand_argument;
use crate::clause::ClauseDetector;
use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::extraction::DetailedExtraction;
use crate::extractor::PatternExtractor;
use crate::part::Part;
use crate::relation::expand_relation;

/// Turns role matches into extractions.
///
/// Holds everything that stays fixed across sentences: the configuration,
/// the compiled clause pattern and the lemmatizer.
pub struct Assembler {
    config: ExtractorConfig,
    clause: ClauseDetector,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Assembler {
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let clause = ClauseDetector::from_config(&config)?;
        Ok(Self {
            config,
            clause,
            lemmatizer: Box::new(RuleLemmatizer),
        })
    }

    pub fn with_lemmatizer(mut self, lemmatizer: impl Lemmatizer + 'static) -> Self {
        self.lemmatizer = Box::new(lemmatizer);
        self
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the extraction for one match.
    ///
    /// A match lacking `arg1`, `arg2` or any `rel*` role is an error. A match
    /// whose arguments end up overlapping yields `Ok(None)`. Without
    /// `expand`, every part is just its head node.
    pub fn assemble(
        &self,
        graph: &DependencyGraph,
        role_match: Arc<RoleMatch>,
        extractor: &Arc<PatternExtractor>,
        expand: bool,
    ) -> Result<Option<DetailedExtraction>, ExtractError> {
        let rels = role_match.relations();
        if rels.is_empty() {
            return Err(missing(REL_PREFIX, &role_match));
        }
        let arg1 = role_match.get(ARG1).ok_or_else(|| missing(ARG1, &role_match))?;
        let arg2 = role_match.get(ARG2).ok_or_else(|| missing(ARG2, &role_match))?;
        if let Some((role, node)) = role_match.roles().find(|&(_, node)| graph.get(node).is_none()) {
            return Err(ExtractError::UnknownNode {
                role: role.to_string(),
                node,
            });
        }

        let (arg1_nodes, arg2_nodes) = if expand {
            let rel_nodes: NodeSet = rels.iter().copied().collect();
            (
                expand_argument(graph, arg1, &rel_nodes, &self.config),
                expand_argument(graph, arg2, &rel_nodes, &self.config),
            )
        } else {
            (NodeSet::from([arg1]), NodeSet::from([arg2]))
        };

        let arg1_part = Part::from_nodes(graph, arg1_nodes);
        let arg2_part = Part::from_nodes(graph, arg2_nodes);
        if arg1_part.span().intersects(&arg2_part.span()) {
            debug!(
                extractor = extractor.name(),
                arg1 = arg1_part.text(),
                arg2 = arg2_part.text(),
                "discarding match with overlapping arguments"
            );
            return Ok(None);
        }

        let rel_part = if expand {
            let until: NodeSet = arg1_part.nodes().union(arg2_part.nodes()).copied().collect();
            let parts: Vec<Part> = rels
                .iter()
                .map(|&rel| expand_relation(graph, rel, &until, &self.config))
                .collect();
            let text = parts.iter().map(Part::text).collect::<Vec<_>>().join(" ");
            let nodes: NodeSet = parts.iter().flat_map(|p| p.nodes().iter().copied()).collect();
            Part::with_text(graph, nodes, text)
        } else {
            let text = rels.iter().map(|&rel| graph[rel].text.as_str()).collect::<Vec<_>>().join(" ");
            Part::with_text(graph, rels.iter().copied().collect(), text)
        };

        let claimed: NodeSet = [arg1_part.nodes(), rel_part.nodes(), arg2_part.nodes()]
            .into_iter()
            .flatten()
            .copied()
            .collect();
        let clausal = rels
            .iter()
            .find_map(|&rel| self.clause.detect(graph, rel, &claimed, &self.config));
        let modifier = rels.iter().find_map(|&rel| detect_adverbial(graph, rel, &self.config));

        let lemmas = self.relation_lemmas(graph, rel_part.nodes());
        trace!(rel = rel_part.text(), lemmas = ?lemmas, "assembled relation");

        Ok(Some(DetailedExtraction::new(
            Arc::clone(extractor),
            role_match,
            arg1_part,
            rel_part,
            lemmas,
            arg2_part,
            clausal,
            modifier,
        )))
    }

    /// Lowercased lemmas of the relation tokens. The parser's lemma wins over
    /// the lemmatizer; blacklisted lemmas are left out.
    pub fn relation_lemmas(&self, graph: &DependencyGraph, nodes: &NodeSet) -> BTreeSet<String> {
        nodes
            .iter()
            .map(|&n| lemma_of(graph, n, self.lemmatizer.as_ref()))
            .filter(|lemma| !self.config.lemma_blacklist.contains(lemma))
            .collect()
    }
}

fn lemma_of(graph: &DependencyGraph, node: NodeId, lemmatizer: &dyn Lemmatizer) -> String {
    let node = &graph[node];
    match &node.lemma {
        Some(lemma) => lemma.to_lowercase(),
        None => lemmatizer.lemmatize(&node.text).to_lowercase(),
    }
}

fn missing(role: &'static str, found: &RoleMatch) -> ExtractError {
    ExtractError::MissingRole {
        role,
        found: found.to_string(),
    }
}
