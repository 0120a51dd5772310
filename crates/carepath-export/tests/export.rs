use std::io::Read;

use carepath_core::models::evaluation::Evaluation;
use carepath_core::presets::get_preset;
use carepath_export::bundle::{build_bundle, bundle_file_name, entry, write_bundle};
use carepath_export::docx::generate_docx;
use carepath_export::render::{clinician_summary, patient_summary, raw_dump};
use carepath_core::models::routing::DisplayTier;
use carepath_export::styles::{tier_color, DocumentStyles};

fn evaluation(preset_id: &str) -> Evaluation {
    let intake = get_preset(preset_id).unwrap().record();
    let result = carepath_rules::evaluate(&intake);
    Evaluation::new(intake, result)
}

fn unpack(blob: &[u8]) -> Vec<(String, Vec<u8>)> {
    let decoder = zstd::Decoder::new(blob).unwrap();
    let mut archive = tar::Archive::new(decoder);
    archive
        .entries()
        .unwrap()
        .map(|entry| {
            let mut entry = entry.unwrap();
            let name = entry.path().unwrap().to_string_lossy().into_owned();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes).unwrap();
            (name, bytes)
        })
        .collect()
}

#[test]
fn patient_summary_lists_decision_and_reasons() {
    let evaluation = evaluation("chest_pain_red_flag");
    let summary = patient_summary(&evaluation, None).unwrap();

    assert!(summary.contains("**Recommended care setting:** ED"));
    assert!(summary.contains("**How soon:** Immediate"));
    assert!(summary.contains("- One or more red-flag symptoms selected."));
    assert!(summary.contains("- If symptoms rapidly worsen, seek urgent evaluation."));
    assert!(summary.contains(&evaluation.id.to_string()));
    assert!(!summary.contains("In plain language"));
}

#[test]
fn patient_summary_includes_narrative_when_given() {
    let evaluation = evaluation("mild_cough");
    let summary = patient_summary(&evaluation, Some("Your cough is stable.")).unwrap();

    assert!(summary.contains("## In plain language\nYour cough is stable."));
}

#[test]
fn clinician_summary_traces_rules_and_inputs() {
    let evaluation = evaluation("fever_immunocompromised");
    let summary = clinician_summary(&evaluation).unwrap();

    assert!(summary.contains("> Route: Urgent Care | Urgency: Same day"));
    assert!(summary.contains("- **Deciding stage:** urgent_care"));
    assert!(summary.contains("1. Severity ≥6/10."));
    assert!(summary.contains("2. Symptoms worsening."));
    assert!(summary.contains("- **Temperature:** 101.6 °F"));
    assert!(summary.contains("- **SpO2:** 96%"));
    assert!(summary.contains("- **Red flags:** none"));
    assert!(!summary.contains("## Injury"));
}

#[test]
fn clinician_summary_shows_injury_details() {
    let evaluation = evaluation("injury_cant_bear_weight");
    let summary = clinician_summary(&evaluation).unwrap();

    assert!(summary.contains("## Injury"));
    assert!(summary.contains("- **Location:** Ankle"));
    assert!(summary.contains("- **Flags:** Unable to bear weight or use limb"));
    assert!(summary.contains("- **Primary care:** No"));
}

#[test]
fn raw_dump_round_trips() {
    let evaluation = evaluation("injury_cant_bear_weight");
    let json = raw_dump(&evaluation).unwrap();
    let parsed: Evaluation = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, evaluation);
}

#[test]
fn docx_is_a_zip_container() {
    let evaluation = evaluation("mild_cough");
    let summary = clinician_summary(&evaluation).unwrap();
    let bytes = generate_docx(&summary, &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn bundle_contains_every_export() {
    let evaluation = evaluation("chest_pain_red_flag");
    let blob = build_bundle(&evaluation, Some("narrative text"), &DocumentStyles::default()).unwrap();

    let entries = unpack(&blob);
    let names: Vec<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            entry::PATIENT_SUMMARY,
            entry::CLINICIAN_DOCX,
            entry::CLINICIAN_SUMMARY,
            entry::EVALUATION_JSON,
            entry::NARRATIVE,
        ]
    );

    let clinician = &entries[2].1;
    assert_eq!(
        String::from_utf8(clinician.clone()).unwrap(),
        clinician_summary(&evaluation).unwrap()
    );
}

#[test]
fn bundle_without_narrative_still_has_clinician_summary() {
    let evaluation = evaluation("mild_cough");
    let blob = build_bundle(&evaluation, None, &DocumentStyles::default()).unwrap();

    let names: Vec<String> = unpack(&blob).into_iter().map(|(name, _)| name).collect();
    assert!(names.iter().any(|n| n == entry::CLINICIAN_SUMMARY));
    assert!(!names.iter().any(|n| n == entry::NARRATIVE));
}

#[test]
fn bundle_is_written_under_its_keyed_name() {
    let evaluation = evaluation("mild_cough");
    let dir = tempfile::tempdir().unwrap();

    let path = write_bundle(dir.path(), &evaluation, None, &DocumentStyles::default()).unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(file_name, bundle_file_name(&evaluation));
    assert!(file_name.starts_with(&format!("triage_{}_", evaluation.id)));
    assert!(file_name.ends_with("Z.tar.zst"));
    assert!(path.exists());
}

#[test]
fn banner_colour_follows_route_tier() {
    let styles = DocumentStyles::default().for_tier(DisplayTier::Critical);
    assert_eq!(styles.callout_color, tier_color(DisplayTier::Critical));
    assert_eq!(styles.body_font, DocumentStyles::default().body_font);
    assert_ne!(tier_color(DisplayTier::Critical), tier_color(DisplayTier::Success));
}
