use carepath_core::form::{parse_optional_float, parse_optional_int, IntakeForm};
use carepath_core::models::intake::{normalize_conditions, IntakeRecord};
use carepath_core::models::vocabulary::{
    Access, ChiefComplaint, Fever, HappenedBefore, InjuryFlag, RedFlag, RiskCondition, Trend,
};
use carepath_core::presets::{all_presets, get_preset};

#[test]
fn none_of_the_above_collapses_conditions() {
    let conditions = vec![RiskCondition::NoneOfTheAbove, RiskCondition::Diabetes];
    assert!(normalize_conditions(&conditions).is_empty());

    let conditions = vec![RiskCondition::Diabetes, RiskCondition::KidneyDisease];
    assert_eq!(normalize_conditions(&conditions), conditions);
}

#[test]
fn happened_before_is_a_plain_prefix_match() {
    assert!(HappenedBefore::recurrent().is_recurrent());
    assert!(!HappenedBefore::recurrent().is_first_time());
    assert!(HappenedBefore::first_time().is_first_time());
    assert!(HappenedBefore::new("No").is_first_time());
    assert!(HappenedBefore::new("Yes, twice last year").is_recurrent());

    // "Not sure" starts with "No".
    let not_sure = HappenedBefore::not_sure();
    assert!(not_sure.is_first_time());
    assert!(!not_sure.is_recurrent());

    assert!(!HappenedBefore::new("no").is_first_time());
}

#[test]
fn vocabulary_serializes_as_form_labels() {
    let json = serde_json::to_string(&RedFlag::SevereChestPain).unwrap();
    assert_eq!(json, "\"Severe chest pain/pressure\"");

    let fever: Fever = serde_json::from_str("\"Don’t know / can’t check\"").unwrap();
    assert_eq!(fever, Fever::Unknown);

    assert_eq!(ChiefComplaint::ALL.len(), 12);
    assert_eq!(RedFlag::ALL.len(), 13);
    assert_eq!(InjuryFlag::ALL.len(), 6);
}

#[test]
fn record_accepts_short_form_keys() {
    let json = r#"{
        "chief_complaint": "Shortness of breath",
        "severity_0_10": 5,
        "trend": "Worse",
        "happened_before": "Not sure",
        "fever": "No",
        "red_flags": [],
        "conditions": [],
        "spo2": 89,
        "pcp_access": "Yes",
        "injury_flags": [],
        "pregnant": "Not applicable"
    }"#;

    let record = IntakeRecord::from_json(json).unwrap();
    assert_eq!(record.chief_complaint, ChiefComplaint::ShortnessOfBreath);
    assert_eq!(record.severity, 5);
    assert_eq!(record.oxygen_saturation, Some(89));
    assert_eq!(record.primary_care_access, Access::Yes);
    assert_eq!(record.urgent_care_access, Access::Yes);
    assert!(record.injury.is_none());
}

#[test]
fn record_rejects_values_outside_vocabulary() {
    let json = r#"{
        "chief_complaint": "Toothache",
        "severity": 3,
        "trend": "Same",
        "fever": "No",
        "pregnant": "No",
        "primary_care_access": "Yes"
    }"#;
    assert!(IntakeRecord::from_json(json).is_err());
}

#[test]
fn blank_or_garbled_vitals_are_unknown() {
    assert_eq!(parse_optional_int(""), None);
    assert_eq!(parse_optional_int("   "), None);
    assert_eq!(parse_optional_int("ninety"), None);
    assert_eq!(parse_optional_int(" 96 "), Some(96));
    assert_eq!(parse_optional_int("-5"), Some(0));
    assert_eq!(parse_optional_int("96.5"), None);
    assert_eq!(parse_optional_float("101.6"), Some(101.6));
    assert_eq!(parse_optional_float("NaN"), None);
}

#[test]
fn form_conversion_applies_collection_rules() {
    let form = IntakeForm {
        chief_complaint: ChiefComplaint::Headache,
        severity: 14,
        conditions: vec![RiskCondition::NoneOfTheAbove, RiskCondition::Diabetes],
        oxygen_saturation_raw: "93".to_string(),
        heart_rate_raw: "fast".to_string(),
        injury_flags: vec![InjuryFlag::ObviousDeformity],
        ..IntakeForm::default()
    };

    let record = form.into_record();
    assert_eq!(record.severity, 10);
    assert!(record.conditions.is_empty());
    assert_eq!(record.oxygen_saturation, Some(93));
    assert_eq!(record.heart_rate, None);
    assert!(record.injury_flags.is_empty(), "injury flags only apply to injuries");
    assert!(record.injury.is_none());
}

#[test]
fn form_defaults_fill_missing_keys() {
    let form = IntakeForm::from_json(r#"{ "chief_complaint": "Back pain", "trend": "Worse" }"#).unwrap();
    assert_eq!(form.chief_complaint, ChiefComplaint::BackPain);
    assert_eq!(form.trend, Trend::Worse);
    assert_eq!(form.severity, 4);
    assert_eq!(form.conditions, vec![RiskCondition::NoneOfTheAbove]);
}

#[test]
fn presets_are_registered_and_convertible() {
    let presets = all_presets();
    assert_eq!(presets.len(), 4);

    let injury = get_preset("injury_cant_bear_weight").unwrap();
    let record = injury.record();
    assert_eq!(record.injury_flags, vec![InjuryFlag::CannotBearWeight]);
    assert!(record.injury.is_some());

    let fever = get_preset("fever_immunocompromised").unwrap().record();
    assert_eq!(fever.oxygen_saturation, Some(96));
    assert_eq!(fever.temperature_f, Some(101.6));

    assert!(get_preset("nonexistent").is_none());
}
