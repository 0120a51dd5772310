//! carepath-export
//!
//! Patient and clinician summaries (Tera), DOCX rendering, raw JSON dumps,
//! and per-evaluation tar.zst archives.

pub mod bundle;
pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
