//! carepath-rules
//!
//! The routing engine. Pure rules with no I/O: an intake record goes in, a
//! route, an urgency, and the ordered reasons behind them come out.
//!
//! Rules are a strictly ordered priority list, not a score. The first stage
//! of [`cascade::CASCADE`] that fires decides the result and later stages
//! never run, so exactly one stage explains any output.

pub mod cascade;
pub mod facts;
pub mod reasons;
pub mod triggers;

use carepath_core::models::routing::RoutingResult;
use carepath_core::presets::{all_presets, Preset};

pub use cascade::{cascade, evaluate};

/// Escalation reminders attached to every result, whatever the route.
pub const SAFETY_NOTES: [&str; 2] = [
    "If symptoms rapidly worsen, seek urgent evaluation.",
    "If you develop new red-flag symptoms (trouble breathing, fainting, severe chest pain, stroke signs), go to the ED.",
];

/// Evaluate every registered preset, in display order.
pub fn run_presets() -> Vec<(Preset, RoutingResult)> {
    all_presets()
        .into_iter()
        .map(|preset| {
            let result = evaluate(&preset.record());
            (preset, result)
        })
        .collect()
}
