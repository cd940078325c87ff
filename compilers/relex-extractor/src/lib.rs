//! Expansion of pattern matches into `(arg1; rel; arg2)` extractions.

pub mod adverbial;
pub mod argument;
pub mod assembler;
pub mod clause;
pub mod config;
pub mod error;
mod expand;
pub mod extraction;
pub mod extractor;
pub mod part;
pub mod relation;

#[cfg(test)]
mod testing;

pub use adverbial::detect_adverbial;
pub use argument::expand_argument;
pub use assembler::Assembler;
pub use clause::ClauseDetector;
pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extraction::{DetailedExtraction, Extraction, MinimalExtraction};
pub use extractor::{extract_all, PatternExtractor};
pub use part::{AdverbialModifier, ClausalComponent, Part};
pub use relation::expand_relation;
