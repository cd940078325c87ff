use relex_graph::{Dependency, NodeSet, RoleMatch};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::extractor::PatternExtractor;
use crate::part::{AdverbialModifier, ClausalComponent, Part};

/// Anything that renders to an `(arg1; rel; arg2)` triple.
///
/// Equality between extractions is equality of the three texts; the soft
/// match is the looser check used for near-duplicate detection.
pub trait Extraction {
    fn arg1_text(&self) -> &str;
    fn rel_text(&self) -> &str;
    fn arg2_text(&self) -> &str;
    /// Lowercased relation lemmas, minus the configured blacklist.
    fn rel_lemmas(&self) -> &BTreeSet<String>;

    fn texts(&self) -> (&str, &str, &str) {
        (self.arg1_text(), self.rel_text(), self.arg2_text())
    }

    /// Arguments contain one another and the relations share lemmas.
    fn soft_matches(&self, other: &dyn Extraction) -> bool {
        fn nested(a: &str, b: &str) -> bool {
            a.contains(b) || b.contains(a)
        }

        nested(self.arg1_text(), other.arg1_text())
            && nested(self.arg2_text(), other.arg2_text())
            && self.rel_lemmas() == other.rel_lemmas()
    }
}

fn write_triple(f: &mut fmt::Formatter<'_>, e: &dyn Extraction) -> fmt::Result {
    write!(f, "({}; {}; {})", e.arg1_text(), e.rel_text(), e.arg2_text())
}

/// A fully assembled extraction, keeping the parts and the match it was
/// built from.
///
/// Parts sit behind `Arc` so derived extractions share them.
#[derive(Debug, Clone)]
pub struct DetailedExtraction {
    extractor: Arc<PatternExtractor>,
    role_match: Arc<RoleMatch>,
    arg1: Arc<Part>,
    rel: Arc<Part>,
    rel_lemmas: Arc<BTreeSet<String>>,
    arg2: Arc<Part>,
    clausal: Option<Arc<ClausalComponent>>,
    modifier: Option<Arc<AdverbialModifier>>,
}

impl DetailedExtraction {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        extractor: Arc<PatternExtractor>,
        role_match: Arc<RoleMatch>,
        arg1: Part,
        rel: Part,
        rel_lemmas: BTreeSet<String>,
        arg2: Part,
        clausal: Option<ClausalComponent>,
        modifier: Option<AdverbialModifier>,
    ) -> Self {
        Self {
            extractor,
            role_match,
            arg1: Arc::new(arg1),
            rel: Arc::new(rel),
            rel_lemmas: Arc::new(rel_lemmas),
            arg2: Arc::new(arg2),
            clausal: clausal.map(Arc::new),
            modifier: modifier.map(Arc::new),
        }
    }

    pub fn extractor(&self) -> &PatternExtractor {
        &self.extractor
    }

    pub fn role_match(&self) -> &RoleMatch {
        &self.role_match
    }

    pub fn arg1(&self) -> &Part {
        &self.arg1
    }

    pub fn rel(&self) -> &Part {
        &self.rel
    }

    pub fn arg2(&self) -> &Part {
        &self.arg2
    }

    pub fn clausal(&self) -> Option<&ClausalComponent> {
        self.clausal.as_deref()
    }

    pub fn modifier(&self) -> Option<&AdverbialModifier> {
        self.modifier.as_deref()
    }

    /// The arcs the pattern walked to bind the roles.
    pub fn edges(&self) -> &[Dependency] {
        self.role_match.bipath()
    }

    /// Every node covered by the extraction, secondary components included.
    pub fn nodes(&self) -> NodeSet {
        let mut all: NodeSet = [&self.arg1, &self.rel, &self.arg2]
            .into_iter()
            .flat_map(|p| p.nodes().iter().copied())
            .collect();
        if let Some(c) = &self.clausal {
            all.extend(c.rel.nodes());
            all.extend(c.arg.nodes());
        }
        if let Some(m) = &self.modifier {
            all.extend(m.clause.nodes());
        }
        all
    }

    /// Copy with a different relation rendering; everything else is shared.
    pub fn with_relation_text(&self, text: impl Into<String>) -> Self {
        Self {
            rel: Arc::new(self.rel.retext(text)),
            ..self.clone()
        }
    }
}

impl Extraction for DetailedExtraction {
    fn arg1_text(&self) -> &str {
        self.arg1.text()
    }

    fn rel_text(&self) -> &str {
        self.rel.text()
    }

    fn arg2_text(&self) -> &str {
        self.arg2.text()
    }

    fn rel_lemmas(&self) -> &BTreeSet<String> {
        &self.rel_lemmas
    }
}

impl PartialEq for DetailedExtraction {
    fn eq(&self, other: &Self) -> bool {
        self.texts() == other.texts()
    }
}

impl Eq for DetailedExtraction {}

impl Hash for DetailedExtraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.texts().hash(state);
    }
}

impl fmt::Display for DetailedExtraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self)?;
        if let Some(c) = &self.clausal {
            write!(f, " [clause: {}]", c.text())?;
        }
        if let Some(m) = &self.modifier {
            write!(f, " [adverbial: {}]", m.text())?;
        }
        Ok(())
    }
}

/// Three strings and a lemma set, for extractions that outlive their graph.
#[derive(Debug, Clone, Default)]
pub struct MinimalExtraction {
    pub arg1: String,
    pub rel: String,
    pub arg2: String,
    pub rel_lemmas: BTreeSet<String>,
}

impl MinimalExtraction {
    pub fn new(arg1: impl Into<String>, rel: impl Into<String>, arg2: impl Into<String>) -> Self {
        Self {
            arg1: arg1.into(),
            rel: rel.into(),
            arg2: arg2.into(),
            rel_lemmas: BTreeSet::new(),
        }
    }

    pub fn with_lemmas<I, S>(mut self, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rel_lemmas = lemmas.into_iter().map(Into::into).collect();
        self
    }
}

impl From<&DetailedExtraction> for MinimalExtraction {
    fn from(e: &DetailedExtraction) -> Self {
        Self {
            arg1: e.arg1_text().to_string(),
            rel: e.rel_text().to_string(),
            arg2: e.arg2_text().to_string(),
            rel_lemmas: e.rel_lemmas().clone(),
        }
    }
}

impl Extraction for MinimalExtraction {
    fn arg1_text(&self) -> &str {
        &self.arg1
    }

    fn rel_text(&self) -> &str {
        &self.rel
    }

    fn arg2_text(&self) -> &str {
        &self.arg2
    }

    fn rel_lemmas(&self) -> &BTreeSet<String> {
        &self.rel_lemmas
    }
}

impl PartialEq for MinimalExtraction {
    fn eq(&self, other: &Self) -> bool {
        self.texts() == other.texts()
    }
}

impl Eq for MinimalExtraction {}

impl Hash for MinimalExtraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.texts().hash(state);
    }
}

impl PartialEq<MinimalExtraction> for DetailedExtraction {
    fn eq(&self, other: &MinimalExtraction) -> bool {
        self.texts() == other.texts()
    }
}

impl PartialEq<DetailedExtraction> for MinimalExtraction {
    fn eq(&self, other: &DetailedExtraction) -> bool {
        self.texts() == other.texts()
    }
}

impl fmt::Display for MinimalExtraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self)
    }
}
