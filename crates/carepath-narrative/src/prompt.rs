//! Prompt construction.
//!
//! The decision travels as a `<routing_decision>` block the model may only
//! restate; patient answers travel as `<patient_inputs>`.

use carepath_core::models::intake::IntakeRecord;
use carepath_core::models::routing::RoutingResult;

/// Prefix of the line every narrative opens with.
pub const HEADER_PREFIX: &str = "Recommended care setting:";

/// Warning signs every narrative must list, whatever the route.
pub const WATCH_OUTS: [&str; 4] = [
    "Trouble breathing at rest",
    "Signs of stroke (face droop, arm weakness, speech trouble)",
    "Fainting or nearly fainting",
    "Chest pain that is getting worse",
];

/// Closing line of every narrative.
pub const DISCLAIMER: &str = "This explanation is not medical advice. If you believe you are experiencing an emergency, call local emergency services.";

pub const SYSTEM_PROMPT: &str = "\
You explain triage routing decisions to patients in plain language. \
The decision has already been made by a fixed rule set and is final. \
You must not change, question, or soften it, and you must never recommend \
a different care setting. Do not diagnose. Use only the reasons and inputs \
you are given; do not invent symptoms, history, or test results.";

/// The exact opening line for `result`.
pub fn header_line(result: &RoutingResult) -> String {
    format!("{HEADER_PREFIX} {} ({})", result.route, result.urgency)
}

pub fn build_system_prompt() -> String {
    SYSTEM_PROMPT.to_string()
}

/// Build the user prompt for one decision.
pub fn build_user_prompt(intake: &IntakeRecord, result: &RoutingResult) -> String {
    let mut prompt = String::from("<routing_decision>\n");
    prompt.push_str(&format!("route: {}\n", result.route));
    prompt.push_str(&format!("urgency: {}\n", result.urgency));
    prompt.push_str("reasons:\n");
    for reason in &result.reasons {
        prompt.push_str(&format!("- {reason}\n"));
    }
    prompt.push_str("</routing_decision>\n\n");

    prompt.push_str("<patient_inputs>\n");
    prompt.push_str(&patient_inputs(intake));
    prompt.push_str("</patient_inputs>\n\n");

    prompt.push_str("Write a short explanation for the patient.\n");
    prompt.push_str(&format!(
        "1. Begin with exactly this line: {}\n",
        header_line(result)
    ));
    prompt.push_str("2. Explain why, using only the reasons and inputs above.\n");
    prompt.push_str("3. List these warning signs that mean going to the ED right away:\n");
    for watch_out in WATCH_OUTS {
        prompt.push_str(&format!("   - {watch_out}\n"));
    }
    prompt.push_str(&format!("4. End with exactly this line: {DISCLAIMER}\n"));
    prompt
}

fn patient_inputs(intake: &IntakeRecord) -> String {
    let mut lines = vec![
        format!("chief_complaint: {}", intake.chief_complaint),
        format!("severity: {}/10", intake.severity),
        format!("trend: {}", intake.trend),
        format!("fever: {}", intake.fever),
        format!("happened_before: {}", intake.happened_before),
        format!("pregnant: {}", intake.pregnant),
        format!("conditions: {}", join_or_none(&intake.normalized_conditions())),
        format!("red_flags: {}", join_or_none(&intake.red_flags)),
    ];
    if intake.is_injury() {
        lines.push(format!("injury_flags: {}", join_or_none(&intake.injury_flags)));
    }
    lines.push(match intake.oxygen_saturation {
        Some(spo2) => format!("oxygen_saturation: {spo2}%"),
        None => "oxygen_saturation: not provided".to_string(),
    });
    lines.push(format!("primary_care_access: {}", intake.primary_care_access));

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

fn join_or_none<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
