use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::vocabulary::{
    Access, ChiefComplaint, Fever, HappenedBefore, InjuryFlag, InjuryLocation, InjuryMechanism,
    InjuryType, Onset, Pregnancy, RedFlag, RiskCondition, Sex, Trend,
};

/// One patient's answers, as handed to the routing engine.
///
/// Field aliases accept the short keys of the intake form's debug dump
/// (`severity_0_10`, `spo2`, `pcp_access`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeRecord {
    pub chief_complaint: ChiefComplaint,
    /// Patient-reported severity, 0–10.
    #[serde(alias = "severity_0_10")]
    pub severity: u8,
    pub trend: Trend,
    pub fever: Fever,
    #[serde(default)]
    pub happened_before: HappenedBefore,
    pub pregnant: Pregnancy,
    #[serde(default)]
    pub conditions: Vec<RiskCondition>,
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
    #[serde(default)]
    pub injury_flags: Vec<InjuryFlag>,
    /// SpO₂ in percent. `None` means not measured.
    #[serde(default, alias = "spo2")]
    pub oxygen_saturation: Option<u32>,
    #[serde(alias = "pcp_access")]
    pub primary_care_access: Access,

    // Carried for audit and export only; no rule reads these.
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub onset: Option<Onset>,
    #[serde(default, alias = "temp_f")]
    pub temperature_f: Option<f64>,
    #[serde(default, alias = "hr")]
    pub heart_rate: Option<u32>,
    #[serde(default = "default_access", alias = "urgent_access")]
    pub urgent_care_access: Access,
    #[serde(default)]
    pub injury: Option<InjuryDetails>,
}

/// Descriptive injury details collected alongside the injury flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InjuryDetails {
    pub injury_type: Option<InjuryType>,
    pub location: Option<InjuryLocation>,
    pub mechanism: Option<InjuryMechanism>,
}

fn default_access() -> Access {
    Access::Yes
}

impl IntakeRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Risk conditions with the "None of the above" collapse applied.
    pub fn normalized_conditions(&self) -> Vec<RiskCondition> {
        normalize_conditions(&self.conditions)
    }

    pub fn has_red_flag(&self, flag: RedFlag) -> bool {
        self.red_flags.contains(&flag)
    }

    pub fn has_injury_flag(&self, flag: InjuryFlag) -> bool {
        self.injury_flags.contains(&flag)
    }

    pub fn is_injury(&self) -> bool {
        self.chief_complaint == ChiefComplaint::InjuryWound
    }
}

/// Selecting "None of the above" empties the set, whatever else was ticked.
pub fn normalize_conditions(conditions: &[RiskCondition]) -> Vec<RiskCondition> {
    if conditions.contains(&RiskCondition::NoneOfTheAbove) {
        return Vec::new();
    }
    conditions.to_vec()
}
