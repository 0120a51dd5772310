//! Terminal rendering of routing results.
//!
//! Colour follows `colored`'s environment handling: off when stdout is not a
//! terminal or `NO_COLOR` is set, forced on by `CLICOLOR_FORCE`.

use std::fmt::Write;

use carepath_core::models::evaluation::Evaluation;
use carepath_core::models::routing::{DisplayTier, RoutingResult};
use colored::{Color, Colorize};
use serde::Serialize;

fn tier_style(tier: DisplayTier) -> (Color, &'static str) {
    match tier {
        DisplayTier::Critical => (Color::Red, "!!"),
        DisplayTier::Warning => (Color::Yellow, "! "),
        DisplayTier::Info => (Color::Blue, "i "),
        DisplayTier::Success => (Color::Green, "ok"),
    }
}

/// Human-readable block: tier-styled header, reasons, safety notes.
pub fn render_result(result: &RoutingResult) -> String {
    let (color, marker) = tier_style(result.route.tier());
    let header = format!(
        "[{marker}] Recommended care setting: {} ({})",
        result.route, result.urgency
    );

    let mut out = String::new();
    let _ = writeln!(out, "{}", header.color(color).bold());

    out.push_str("\nWhy:\n");
    for reason in &result.reasons {
        let _ = writeln!(out, "  - {reason}");
    }

    out.push_str("\nSafety notes:\n");
    for note in &result.safety_notes {
        let _ = writeln!(out, "  - {note}");
    }
    out
}

pub fn render_narrative(text: &str) -> String {
    format!("\nIn plain language:\n{text}\n")
}

#[derive(Debug, Serialize)]
struct EvaluationOutput<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    narrative: Option<&'a str>,
}

/// Machine-readable form for `--json`.
pub fn render_json(evaluation: &Evaluation, narrative: Option<&str>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&EvaluationOutput {
        evaluation,
        narrative,
    })
}
