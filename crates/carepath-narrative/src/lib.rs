//! carepath-narrative
//!
//! Optional plain-language explanation of a routing decision. The decision is
//! final before this crate sees it: prompts carry it as fixed facts, and any
//! reply that names a different route is discarded.

pub mod error;
pub mod explain;
pub mod generator;
pub mod prompt;
