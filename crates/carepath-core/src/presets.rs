//! Named sanity-check scenarios, one per care setting the intake form demos.

use crate::form::IntakeForm;
use crate::models::intake::IntakeRecord;
use crate::models::routing::Route;
use crate::models::vocabulary::{
    Access, ChiefComplaint, Fever, HappenedBefore, InjuryFlag, InjuryLocation, InjuryMechanism,
    InjuryType, Onset, Pregnancy, RedFlag, RiskCondition, Sex, Trend,
};

#[derive(Debug, Clone)]
pub struct Preset {
    /// Stable identifier (e.g. "mild_cough").
    pub id: &'static str,
    pub name: &'static str,
    /// Where the scenario is expected to land.
    pub expected_route: Route,
    pub form: IntakeForm,
}

impl Preset {
    pub fn record(&self) -> IntakeRecord {
        self.form.clone().into_record()
    }
}

/// Return all registered presets, in display order.
pub fn all_presets() -> Vec<Preset> {
    vec![
        chest_pain_red_flag(),
        fever_immunocompromised(),
        mild_cough(),
        injury_cant_bear_weight(),
    ]
}

/// Look up a preset by ID.
pub fn get_preset(id: &str) -> Option<Preset> {
    all_presets().into_iter().find(|p| p.id == id)
}

fn chest_pain_red_flag() -> Preset {
    Preset {
        id: "chest_pain_red_flag",
        name: "Person A: ED (red flag chest pain)",
        expected_route: Route::EmergencyDepartment,
        form: IntakeForm {
            age: Some(58),
            sex: Some(Sex::Male),
            pregnant: Pregnancy::NotApplicable,
            chief_complaint: ChiefComplaint::ChestPain,
            onset: Some(Onset::SixTo24Hours),
            severity: 8,
            trend: Trend::Worse,
            happened_before: HappenedBefore::first_time(),
            fever: Fever::No,
            red_flags: vec![RedFlag::SevereChestPain],
            conditions: vec![RiskCondition::HeartDisease],
            ..IntakeForm::default()
        },
    }
}

fn fever_immunocompromised() -> Preset {
    Preset {
        id: "fever_immunocompromised",
        name: "Person B: Urgent Care (fever + immunocompromised)",
        expected_route: Route::UrgentCare,
        form: IntakeForm {
            age: Some(45),
            sex: Some(Sex::Female),
            pregnant: Pregnancy::No,
            chief_complaint: ChiefComplaint::Fever,
            onset: Some(Onset::OneToThreeDays),
            severity: 6,
            trend: Trend::Worse,
            happened_before: HappenedBefore::not_sure(),
            fever: Fever::Yes,
            conditions: vec![RiskCondition::Immunocompromised],
            temperature_f_raw: "101.6".to_string(),
            heart_rate_raw: "105".to_string(),
            oxygen_saturation_raw: "96".to_string(),
            ..IntakeForm::default()
        },
    }
}

fn mild_cough() -> Preset {
    Preset {
        id: "mild_cough",
        name: "Person C: PCP (mild recurrent cough)",
        expected_route: Route::PrimaryCare,
        form: IntakeForm {
            age: Some(29),
            sex: Some(Sex::Male),
            pregnant: Pregnancy::NotApplicable,
            chief_complaint: ChiefComplaint::CoughSoreThroat,
            onset: Some(Onset::SixTo24Hours),
            severity: 2,
            trend: Trend::Same,
            happened_before: HappenedBefore::recurrent(),
            fever: Fever::Unknown,
            conditions: vec![RiskCondition::NoneOfTheAbove],
            ..IntakeForm::default()
        },
    }
}

fn injury_cant_bear_weight() -> Preset {
    Preset {
        id: "injury_cant_bear_weight",
        name: "Person D: Injury Urgent Care (can’t bear weight)",
        expected_route: Route::UrgentCare,
        form: IntakeForm {
            age: Some(33),
            sex: Some(Sex::Male),
            pregnant: Pregnancy::NotApplicable,
            chief_complaint: ChiefComplaint::InjuryWound,
            onset: Some(Onset::UnderSixHours),
            severity: 6,
            trend: Trend::Worse,
            happened_before: HappenedBefore::first_time(),
            fever: Fever::No,
            conditions: vec![RiskCondition::NoneOfTheAbove],
            primary_care_access: Access::No,
            injury_type: Some(InjuryType::Joint),
            injury_location: Some(InjuryLocation::Ankle),
            injury_mechanism: Some(InjuryMechanism::Sports),
            injury_flags: vec![InjuryFlag::CannotBearWeight],
            ..IntakeForm::default()
        },
    }
}
