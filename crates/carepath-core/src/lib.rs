//! carepath-core
//!
//! Shared vocabulary of the triage router: intake records, the closed option
//! lists the intake form offers, routing results, and evaluation envelopes.
//! Pure data with no I/O; every other crate in the workspace speaks these types.

pub mod error;
pub mod form;
pub mod models;
pub mod presets;
