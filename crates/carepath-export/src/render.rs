use serde::Serialize;
use tera::{Context, Tera};

use carepath_core::models::evaluation::Evaluation;

use crate::error::ExportError;

const PATIENT_SUMMARY: &str = include_str!("../templates/patient_summary.md.tera");
const CLINICIAN_SUMMARY: &str = include_str!("../templates/clinician_summary.md.tera");

const NOT_PROVIDED: &str = "not provided";

/// Flattened, pre-formatted view of an evaluation for the summary templates.
#[derive(Debug, Serialize)]
struct SummaryView<'a> {
    evaluation_id: String,
    evaluated_at: String,
    route: &'static str,
    urgency: &'static str,
    decided_by: &'static str,
    reasons: &'a [String],
    safety_notes: &'a [String],
    narrative: Option<&'a str>,
    chief_complaint: &'static str,
    onset: &'static str,
    severity: u8,
    trend: &'static str,
    happened_before: &'a str,
    fever: &'static str,
    age: String,
    sex: &'static str,
    pregnant: &'static str,
    temperature: String,
    heart_rate: String,
    oxygen_saturation: String,
    conditions: String,
    red_flags: String,
    injury: Option<InjuryView>,
    primary_care_access: &'static str,
    urgent_care_access: &'static str,
}

#[derive(Debug, Serialize)]
struct InjuryView {
    injury_type: &'static str,
    location: &'static str,
    mechanism: &'static str,
    flags: String,
}

impl<'a> SummaryView<'a> {
    fn new(evaluation: &'a Evaluation, narrative: Option<&'a str>) -> Self {
        let intake = &evaluation.intake;
        let result = &evaluation.result;

        let injury = intake.injury.as_ref().map(|details| InjuryView {
            injury_type: details.injury_type.map_or(NOT_PROVIDED, |t| t.label()),
            location: details.location.map_or(NOT_PROVIDED, |l| l.label()),
            mechanism: details.mechanism.map_or(NOT_PROVIDED, |m| m.label()),
            flags: join_labels(intake.injury_flags.iter().map(|f| f.label())),
        });

        Self {
            evaluation_id: evaluation.id.to_string(),
            evaluated_at: evaluation.evaluated_at.to_string(),
            route: result.route.label(),
            urgency: result.urgency.label(),
            decided_by: result.decided_by.name(),
            reasons: &result.reasons,
            safety_notes: &result.safety_notes,
            narrative,
            chief_complaint: intake.chief_complaint.label(),
            onset: intake.onset.map_or(NOT_PROVIDED, |o| o.label()),
            severity: intake.severity,
            trend: intake.trend.label(),
            happened_before: intake.happened_before.as_str(),
            fever: intake.fever.label(),
            age: optional(intake.age, |age| age.to_string()),
            sex: intake.sex.map_or(NOT_PROVIDED, |s| s.label()),
            pregnant: intake.pregnant.label(),
            temperature: optional(intake.temperature_f, |t| format!("{t:.1} °F")),
            heart_rate: optional(intake.heart_rate, |hr| format!("{hr} bpm")),
            oxygen_saturation: optional(intake.oxygen_saturation, |s| format!("{s}%")),
            conditions: join_labels(intake.normalized_conditions().iter().map(|c| c.label())),
            red_flags: join_labels(intake.red_flags.iter().map(|f| f.label())),
            injury,
            primary_care_access: intake.primary_care_access.label(),
            urgent_care_access: intake.urgent_care_access.label(),
        }
    }
}

/// Patient-facing summary. Includes the narrative when one was generated.
pub fn patient_summary(
    evaluation: &Evaluation,
    narrative: Option<&str>,
) -> Result<String, ExportError> {
    render_template(
        "patient_summary.md",
        PATIENT_SUMMARY,
        &SummaryView::new(evaluation, narrative),
    )
}

/// Clinician-facing structured summary. Never includes the narrative.
pub fn clinician_summary(evaluation: &Evaluation) -> Result<String, ExportError> {
    render_template(
        "clinician_summary.md",
        CLINICIAN_SUMMARY,
        &SummaryView::new(evaluation, None),
    )
}

/// Full evaluation (ids, intake, result) as pretty JSON.
pub fn raw_dump(evaluation: &Evaluation) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}

/// Render a Tera template against any serializable view.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    view: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn optional<T>(value: Option<T>, format: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| NOT_PROVIDED.to_string(), format)
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    let joined = labels.collect::<Vec<_>>().join("; ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}
