use relex_protocol::labels;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ExtractError;

fn label_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Labels and word lists steering the expansion walks.
///
/// Every field has a default, so a JSON file only needs to name what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Modifiers pulled into an argument (and into a relational noun).
    pub argument_labels: BTreeSet<String>,
    /// Clauses attached to a non-proper-noun argument as whole subtrees.
    pub argument_clause_labels: BTreeSet<String>,
    /// Arcs joining conjuncts of a coordination.
    pub conjunction_labels: BTreeSet<String>,
    /// Arcs always attached to a relation head.
    pub relation_attach_labels: BTreeSet<String>,
    /// Arc attaching adverbs to a relation head.
    pub adverb_label: String,
    pub copula_label: String,
    /// Object arcs a relation may absorb when unambiguous.
    pub object_labels: BTreeSet<String>,
    pub adverbial_clause_label: String,
    /// Pattern anchored at a relation node; must bind `rel` and `arg`.
    pub clause_pattern: String,
    /// Relation lemmas that carry no meaning of their own.
    pub lemma_blacklist: BTreeSet<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            argument_labels: label_set(&[
                labels::DET,
                labels::PREP_OF,
                labels::AMOD,
                labels::NUM,
                labels::NUMBER,
                labels::NN,
                labels::POSS,
                labels::QUANTMOD,
                labels::NEG,
            ]),
            argument_clause_labels: label_set(&[
                labels::RCMOD,
                labels::INFMOD,
                labels::PARTMOD,
                labels::REF,
                labels::PREPC_OF,
            ]),
            conjunction_labels: label_set(&[labels::CONJ_AND, labels::CONJ_OR]),
            relation_attach_labels: label_set(&[labels::AUX, labels::COP, labels::AUXPASS, labels::PRT]),
            adverb_label: labels::ADVMOD.to_string(),
            copula_label: labels::COP.to_string(),
            object_labels: label_set(&[labels::DOBJ, labels::IOBJ]),
            adverbial_clause_label: labels::ADVCL.to_string(),
            clause_pattern: "{head} >ccomp> {rel:postag=/VB.*/} >nsubj|nsubjpass> {arg}".to_string(),
            lemma_blacklist: label_set(&[
                "be", "the", "do", "will", "would", "shall", "should", "can", "could", "may", "might",
                "must",
            ]),
        }
    }
}

impl ExtractorConfig {
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
