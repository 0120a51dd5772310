//! carepath-cli library root.
//!
//! Config handling and terminal rendering live here so integration tests
//! can exercise them without spawning the binary.

pub mod config;
pub mod output;
