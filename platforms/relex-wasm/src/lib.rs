use relex_extractor::{Assembler, DetailedExtraction, Extraction, ExtractorConfig, PatternExtractor};
use relex_graph::DependencyGraph;
use relex_protocol::SentenceGraph;
use rkyv::{AlignedVec, Deserialize};
use serde::Serialize;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One extraction as sent back to JavaScript.
#[derive(Debug, Serialize)]
pub struct ExtractionRow {
    pub extractor: String,
    pub arg1: String,
    pub rel: String,
    pub arg2: String,
    pub rel_lemmas: Vec<String>,
    pub clause: Option<String>,
    pub adverbial: Option<String>,
}

impl From<&DetailedExtraction> for ExtractionRow {
    fn from(e: &DetailedExtraction) -> Self {
        Self {
            extractor: e.extractor().name().to_string(),
            arg1: e.arg1_text().to_string(),
            rel: e.rel_text().to_string(),
            arg2: e.arg2_text().to_string(),
            rel_lemmas: e.rel_lemmas().iter().cloned().collect(),
            clause: e.clausal().map(|c| c.text()),
            adverbial: e.modifier().map(|m| m.text().to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    pub sentence: u32,
    pub extractions: Vec<ExtractionRow>,
    pub debug_info: String,
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extraction engine living in the browser. Holds the configuration; graphs
/// and patterns come with each call.
#[wasm_bindgen]
pub struct RelexEngine {
    assembler: Assembler,
}

#[wasm_bindgen]
impl RelexEngine {
    /// `config_json` may be empty for the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<RelexEngine, JsValue> {
        let config = if config_json.trim().is_empty() {
            ExtractorConfig::default()
        } else {
            ExtractorConfig::from_json(config_json).map_err(js_error)?
        };
        let assembler = Assembler::new(config).map_err(js_error)?;
        Ok(Self { assembler })
    }

    /// Sentence graph as a plain JS object -> extraction report.
    pub fn extract(&self, graph: JsValue, pattern: &str, expand: bool) -> Result<JsValue, JsValue> {
        let sentence: SentenceGraph = serde_wasm_bindgen::from_value(graph)?;
        self.run(&sentence, pattern, expand)
    }

    /// Same as `extract`, for a graph archived by `relex compile`.
    pub fn extract_archived(&self, data: &[u8], pattern: &str, expand: bool) -> Result<JsValue, JsValue> {
        // Archives must be read from aligned memory
        let mut aligned = AlignedVec::with_capacity(data.len());
        aligned.extend_from_slice(data);

        let archived = rkyv::check_archived_root::<SentenceGraph>(&aligned)
            .map_err(|e| js_error(format!("invalid sentence archive: {:?}", e)))?;
        let sentence: SentenceGraph = archived.deserialize(&mut rkyv::Infallible).map_err(|e| -> JsValue { match e {} })?;
        self.run(&sentence, pattern, expand)
    }

    fn run(&self, sentence: &SentenceGraph, pattern: &str, expand: bool) -> Result<JsValue, JsValue> {
        let graph = DependencyGraph::from_sentence(sentence).map_err(js_error)?;
        let extractor = Arc::new(PatternExtractor::compile("wasm", pattern).map_err(js_error)?);
        let found = extractor.extract(&graph, &self.assembler, expand).map_err(js_error)?;

        let report = ExtractionReport {
            sentence: graph.id().into(),
            extractions: found.iter().map(ExtractionRow::from).collect(),
            debug_info: format!("Nodes: {}, Edges: {}", graph.len(), graph.edges().count()),
        };

        Ok(serde_wasm_bindgen::to_value(&report)?)
    }
}
