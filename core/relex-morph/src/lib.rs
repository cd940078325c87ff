#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

/// Maps a surface form to its dictionary headword.
///
/// Implementations must be pure: the same input always yields the same
/// lemma, so extractions stay comparable across runs and threads.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Lowercases the word and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

/// An inflectional ending and what replaces it in the headword.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Shortest stem the rule may leave behind.
    pub min_stem: usize,
}

const fn rule(suffix: &'static str, replacement: &'static str, min_stem: usize) -> SuffixRule {
    SuffixRule { suffix, replacement, min_stem }
}

/// Irregular forms checked before any suffix rule.
const IRREGULAR: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"),
    ("been", "be"), ("being", "be"), ("'s", "be"), ("'re", "be"), ("'m", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"),
    ("said", "say"), ("says", "say"),
    ("made", "make"), ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("ate", "eat"), ("eaten", "eat"), ("took", "take"), ("taken", "take"),
    ("gave", "give"), ("given", "give"), ("saw", "see"), ("seen", "see"),
    ("came", "come"), ("got", "get"), ("gotten", "get"), ("knew", "know"),
    ("known", "know"), ("thought", "think"), ("told", "tell"), ("found", "find"),
    ("left", "leave"), ("felt", "feel"), ("became", "become"), ("began", "begin"),
    ("begun", "begin"), ("brought", "bring"), ("bought", "buy"), ("built", "build"),
    ("held", "hold"), ("kept", "keep"), ("led", "lead"), ("met", "meet"),
    ("paid", "pay"), ("ran", "run"), ("sent", "send"), ("sold", "sell"),
    ("spent", "spend"), ("stood", "stand"), ("won", "win"), ("wrote", "write"),
    ("written", "write"), ("born", "bear"), ("children", "child"), ("men", "man"),
    ("women", "woman"), ("people", "person"), ("feet", "foot"), ("teeth", "tooth"),
];

/// Ordered suffix rules; the first applicable rule wins.
const RULES: &[SuffixRule] = &[
    rule("ies", "y", 2),
    rule("ied", "y", 2),
    rule("sses", "ss", 1),
    rule("ches", "ch", 1),
    rule("shes", "sh", 1),
    rule("xes", "x", 1),
    rule("ing", "", 3),
    rule("ed", "", 3),
    rule("s", "", 3),
];

/// Small rule-based English lemmatizer: irregular table, then suffix rules.
///
/// Good enough to group relation verbs ("eats", "ate", "eating" -> "eat");
/// callers with a real morphological analyser plug it in through
/// [`Lemmatizer`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    fn apply_rules(word: &str) -> String {
        if let Some((_, lemma)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
            return lemma.to_string();
        }

        // Words ending in "ss" are not plurals ("class", "glass")
        if word.ends_with("ss") {
            return word.to_string();
        }

        for r in RULES {
            if let Some(stem) = word.strip_suffix(r.suffix) {
                if stem.chars().count() < r.min_stem {
                    continue;
                }
                return Self::repair_stem(stem, r);
            }
        }

        word.to_string()
    }

    /// Undo consonant doubling ("running" -> "run") after -ing/-ed.
    fn repair_stem(stem: &str, r: &SuffixRule) -> String {
        let base = format!("{}{}", stem, r.replacement);
        if r.suffix != "ing" && r.suffix != "ed" {
            return base;
        }

        let mut chars = stem.chars().rev();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) if a == b && !matches!(a, 'l' | 's' | 'z' | 'e' | 'o') => {
                stem[..stem.len() - a.len_utf8()].to_string()
            }
            _ => base,
        }
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.is_empty() || !lower.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-') {
            return lower;
        }
        Self::apply_rules(&lower)
    }
}
