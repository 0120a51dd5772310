//! Raw intake form values and their conversion into an [`IntakeRecord`].
//!
//! The form collects vitals as free text and always offers the
//! "None of the above" condition, so this is where blank vitals become
//! `None` and the condition sentinel is collapsed before any rule sees it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::intake::{normalize_conditions, InjuryDetails, IntakeRecord};
use crate::models::vocabulary::{
    Access, ChiefComplaint, Fever, HappenedBefore, InjuryFlag, InjuryLocation, InjuryMechanism,
    InjuryType, Onset, Pregnancy, RedFlag, RiskCondition, Sex, Trend,
};

/// Highest severity the form's slider allows.
pub const MAX_SEVERITY: u8 = 10;

/// Form state as submitted. Missing keys take the form's initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct IntakeForm {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub pregnant: Pregnancy,
    pub chief_complaint: ChiefComplaint,
    pub onset: Option<Onset>,
    #[serde(alias = "severity_0_10")]
    pub severity: u8,
    pub trend: Trend,
    pub happened_before: HappenedBefore,
    pub fever: Fever,
    pub red_flags: Vec<RedFlag>,
    pub conditions: Vec<RiskCondition>,
    #[serde(alias = "temp_f_raw")]
    pub temperature_f_raw: String,
    #[serde(alias = "hr_raw")]
    pub heart_rate_raw: String,
    #[serde(alias = "spo2_raw")]
    pub oxygen_saturation_raw: String,
    #[serde(alias = "pcp_access")]
    pub primary_care_access: Access,
    #[serde(alias = "urgent_access")]
    pub urgent_care_access: Access,
    pub injury_type: Option<InjuryType>,
    pub injury_location: Option<InjuryLocation>,
    pub injury_mechanism: Option<InjuryMechanism>,
    pub injury_flags: Vec<InjuryFlag>,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self {
            age: Some(30),
            sex: Some(Sex::Female),
            pregnant: Pregnancy::NotApplicable,
            chief_complaint: ChiefComplaint::CoughSoreThroat,
            onset: Some(Onset::OneToThreeDays),
            severity: 4,
            trend: Trend::Same,
            happened_before: HappenedBefore::not_sure(),
            fever: Fever::Unknown,
            red_flags: Vec::new(),
            conditions: vec![RiskCondition::NoneOfTheAbove],
            temperature_f_raw: String::new(),
            heart_rate_raw: String::new(),
            oxygen_saturation_raw: String::new(),
            primary_care_access: Access::Yes,
            urgent_care_access: Access::Yes,
            injury_type: None,
            injury_location: None,
            injury_mechanism: None,
            injury_flags: Vec::new(),
        }
    }
}

impl IntakeForm {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the record the engine evaluates.
    ///
    /// Injury details and flags are only kept for the injury complaint, the
    /// same way the form only shows that section for it.
    pub fn into_record(self) -> IntakeRecord {
        let injury_selected = self.chief_complaint == ChiefComplaint::InjuryWound;

        let (injury, injury_flags) = if injury_selected {
            let details = InjuryDetails {
                injury_type: self.injury_type,
                location: self.injury_location,
                mechanism: self.injury_mechanism,
            };
            (Some(details), self.injury_flags)
        } else {
            (None, Vec::new())
        };

        IntakeRecord {
            chief_complaint: self.chief_complaint,
            severity: self.severity.min(MAX_SEVERITY),
            trend: self.trend,
            fever: self.fever,
            happened_before: self.happened_before,
            pregnant: self.pregnant,
            conditions: normalize_conditions(&self.conditions),
            red_flags: self.red_flags,
            injury_flags,
            oxygen_saturation: parse_optional_int(&self.oxygen_saturation_raw),
            primary_care_access: self.primary_care_access,
            age: self.age,
            sex: self.sex,
            onset: self.onset,
            temperature_f: parse_optional_float(&self.temperature_f_raw),
            heart_rate: parse_optional_int(&self.heart_rate_raw),
            urgent_care_access: self.urgent_care_access,
            injury,
        }
    }
}

/// Blank or unparseable text is "not provided", never an error.
///
/// Negative readings are kept as 0 rather than dropped, so a negative SpO₂
/// still trips the low-oxygen check.
pub fn parse_optional_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: i64 = trimmed.parse().ok()?;
    Some(value.clamp(0, i64::from(u32::MAX)) as u32)
}

pub fn parse_optional_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
