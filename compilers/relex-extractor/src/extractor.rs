use relex_graph::DependencyGraph;
use relex_pattern::Pattern;
use std::sync::Arc;
use tracing::{debug, debug_span};

use crate::assembler::Assembler;
use crate::error::ExtractError;
use crate::extraction::DetailedExtraction;

/// A named pattern whose matches become extractions.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    name: String,
    pattern: Pattern,
}

impl PatternExtractor {
    pub fn new(name: impl Into<String>, pattern: Pattern) -> Self {
        Self {
            name: name.into(),
            pattern,
        }
    }

    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self, ExtractError> {
        Ok(Self::new(name, Pattern::compile(source)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Extractions for every match of the pattern in `graph`.
    ///
    /// Matches rejected by the assembler are skipped; a malformed match
    /// aborts the sentence.
    pub fn extract(
        self: &Arc<Self>,
        graph: &DependencyGraph,
        assembler: &Assembler,
        expand: bool,
    ) -> Result<Vec<DetailedExtraction>, ExtractError> {
        let span = debug_span!("extract", sentence = %graph.id(), extractor = %self.name);
        let _enter = span.enter();

        let matches = self.pattern.apply(graph);
        debug!(matches = matches.len(), "pattern applied");

        let mut extractions = Vec::new();
        for m in matches {
            if let Some(e) = assembler.assemble(graph, Arc::new(m), self, expand)? {
                extractions.push(e);
            }
        }
        Ok(extractions)
    }
}

/// Run every extractor over one sentence, in order.
pub fn extract_all(
    extractors: &[Arc<PatternExtractor>],
    graph: &DependencyGraph,
    assembler: &Assembler,
    expand: bool,
) -> Result<Vec<DetailedExtraction>, ExtractError> {
    let mut all = Vec::new();
    for extractor in extractors {
        all.extend(extractor.extract(graph, assembler, expand)?);
    }
    Ok(all)
}
