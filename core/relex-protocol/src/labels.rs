//! Stanford dependency labels recognised by the extractor.

// Argument modifiers
pub const DET: &str = "det";
pub const PREP_OF: &str = "prep_of";
pub const AMOD: &str = "amod";
pub const NUM: &str = "num";
pub const NUMBER: &str = "number";
pub const NN: &str = "nn";
pub const POSS: &str = "poss";
pub const QUANTMOD: &str = "quantmod";
pub const NEG: &str = "neg";

// Clauses hanging off an argument
pub const RCMOD: &str = "rcmod";
pub const INFMOD: &str = "infmod";
pub const PARTMOD: &str = "partmod";
pub const REF: &str = "ref";
pub const PREPC_OF: &str = "prepc_of";

// Coordination
pub const CONJ_AND: &str = "conj_and";
pub const CONJ_OR: &str = "conj_or";
pub const CC: &str = "cc";

// Relation attachments
pub const ADVMOD: &str = "advmod";
pub const AUX: &str = "aux";
pub const COP: &str = "cop";
pub const AUXPASS: &str = "auxpass";
pub const PRT: &str = "prt";
pub const DOBJ: &str = "dobj";
pub const IOBJ: &str = "iobj";

// Clausal structure
pub const NSUBJ: &str = "nsubj";
pub const NSUBJPASS: &str = "nsubjpass";
pub const CCOMP: &str = "ccomp";
pub const ADVCL: &str = "advcl";
pub const MARK: &str = "mark";
