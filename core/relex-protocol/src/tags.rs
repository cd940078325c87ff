#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

bitflags! {
    /// Coarse word classes derived from a Penn Treebank tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct PosFlags: u16 {
        const NOUN = 1;
        const PROPER_NOUN = 2;
        const VERB = 4;
        const ADJECTIVE = 8;
        const ADVERB = 16;
        const PRONOUN = 32;
        const WH_PRONOUN = 64;
        const DETERMINER = 128;
        const PREPOSITION = 256;
        const NUMERAL = 512;
        const PARTICLE = 1024;
        const MODAL = 2048;
        const PUNCTUATION = 4096;
    }
}

impl PosFlags {
    /// Classify a Penn Treebank tag. Unknown tags yield no flags.
    pub fn from_penn(tag: &str) -> Self {
        match tag {
            "NNP" | "NNPS" => PosFlags::NOUN | PosFlags::PROPER_NOUN,
            "WP" | "WP$" => PosFlags::PRONOUN | PosFlags::WH_PRONOUN,
            "PRP" | "PRP$" => PosFlags::PRONOUN,
            "DT" | "PDT" | "WDT" => PosFlags::DETERMINER,
            "IN" | "TO" => PosFlags::PREPOSITION,
            "CD" => PosFlags::NUMERAL,
            "RP" => PosFlags::PARTICLE,
            "MD" => PosFlags::MODAL,
            "RB" | "RBR" | "RBS" | "WRB" => PosFlags::ADVERB,
            t if t.starts_with("NN") => PosFlags::NOUN,
            t if t.starts_with("VB") => PosFlags::VERB,
            t if t.starts_with("JJ") => PosFlags::ADJECTIVE,
            t if !t.is_empty() && t.chars().all(|c| !c.is_alphanumeric()) => PosFlags::PUNCTUATION,
            _ => PosFlags::empty(),
        }
    }
}
