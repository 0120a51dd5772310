//! carepath-audit
//!
//! Application-level audit events for the triage pipeline, emitted through
//! `tracing` so they land wherever the subscriber sends logs.

pub mod events;
