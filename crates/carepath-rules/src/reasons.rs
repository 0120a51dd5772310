//! Reason sentences. Their wording is part of the audit trail, so they live
//! here as constants rather than inline in the rules.

pub const RED_FLAGS_SELECTED: &str = "One or more red-flag symptoms selected.";
pub const UNCONTROLLED_BLEEDING: &str = "Uncontrolled bleeding criteria met.";

pub const INJURY_EMERGENT: &str = "Injury criteria suggests emergent evaluation (deformity/open wound/uncontrolled bleeding/neuro symptoms).";
pub const INJURY_SAME_DAY: &str =
    "Injury criteria suggests same-day evaluation (can’t bear weight/severe swelling/high pain).";
pub const INJURY_MILD: &str = "No injury red flags; symptoms appear mild/stable by provided inputs.";

pub const CHEST_PAIN_CARDIAC_HISTORY: &str = "Chest pain/pressure with cardiac history.";
pub const BREATHLESS_LUNG_DISEASE_WORSENING: &str =
    "Shortness of breath with chronic lung disease and worsening trend.";
pub const SEVERE_FIRST_HEADACHE: &str = "Severe headache (≥7/10) and first-time occurrence.";
pub const FEVER_IMMUNOCOMPROMISED_SEVERE: &str =
    "Fever in immunocompromised patient with high severity.";

pub const HIGH_SEVERITY: &str = "Severity ≥6/10.";
pub const WORSENING: &str = "Symptoms worsening.";
pub const FEVER_IMMUNOCOMPROMISED: &str = "Fever with immunocompromised status.";
pub const FIRST_TIME_MODERATE: &str = "First-time symptoms with moderate severity (≥5/10).";
pub const PREGNANCY_FEVER: &str = "Pregnancy + fever (needs clinician evaluation).";
pub const NO_PCP_NEEDS_ASSESSMENT: &str =
    "No PCP access with symptoms likely needing in-person assessment.";

pub const STABLE_MILD_MODERATE: &str = "Stable symptoms with mild–moderate severity (3–5/10).";
pub const STABLE_RECURRENT: &str = "Recurrent similar symptoms with stable trend.";
pub const STABLE_FEVER: &str = "Fever present but no red flags and overall stable by inputs.";
pub const NO_PCP_REROUTE: &str = "No PCP access; recommending urgent care instead.";

pub const NO_ESCALATION: &str = "No red flags or escalation criteria met based on provided inputs.";

pub fn low_oxygen(saturation: u32) -> String {
    format!("Low oxygen saturation provided (SpO₂={saturation}%).")
}
