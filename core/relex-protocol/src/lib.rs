#![no_std] // Keeps the protocol usable from the wasm bridge without std

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod interval;
pub mod labels;
pub mod tags;

// Re-export core types for convenience
pub use ids::{NodeId, SentenceId};
pub use interval::Interval;
pub use tags::PosFlags;

pub mod model;
pub use model::*;
