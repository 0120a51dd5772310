use carepath_core::models::intake::IntakeRecord;
use carepath_core::models::vocabulary::{
    Access, ChiefComplaint, Fever, InjuryFlag, Pregnancy, RedFlag, RiskCondition, Trend,
};

/// Read-only view of an intake record that every rule evaluates against.
///
/// Conditions are normalized once on construction, so no rule can see a
/// condition that the "None of the above" sentinel cleared.
#[derive(Debug)]
pub struct Facts<'a> {
    intake: &'a IntakeRecord,
    conditions: Vec<RiskCondition>,
}

impl<'a> Facts<'a> {
    pub fn new(intake: &'a IntakeRecord) -> Self {
        Self {
            intake,
            conditions: intake.normalized_conditions(),
        }
    }

    pub fn intake(&self) -> &'a IntakeRecord {
        self.intake
    }

    pub fn complaint(&self) -> ChiefComplaint {
        self.intake.chief_complaint
    }

    pub fn severity(&self) -> u8 {
        self.intake.severity
    }

    pub fn worsening(&self) -> bool {
        self.intake.trend == Trend::Worse
    }

    pub fn stable(&self) -> bool {
        self.intake.trend.is_stable()
    }

    pub fn has_fever(&self) -> bool {
        self.intake.fever == Fever::Yes
    }

    pub fn pregnant(&self) -> bool {
        self.intake.pregnant == Pregnancy::Yes
    }

    pub fn first_time(&self) -> bool {
        self.intake.happened_before.is_first_time()
    }

    pub fn recurrent(&self) -> bool {
        self.intake.happened_before.is_recurrent()
    }

    pub fn has_condition(&self, condition: RiskCondition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn immunocompromised(&self) -> bool {
        self.has_condition(RiskCondition::Immunocompromised)
    }

    pub fn any_red_flag(&self) -> bool {
        !self.intake.red_flags.is_empty()
    }

    pub fn has_red_flag(&self, flag: RedFlag) -> bool {
        self.intake.has_red_flag(flag)
    }

    pub fn has_any_injury_flag(&self, flags: &[InjuryFlag]) -> bool {
        flags.iter().any(|flag| self.intake.has_injury_flag(*flag))
    }

    pub fn oxygen_saturation(&self) -> Option<u32> {
        self.intake.oxygen_saturation
    }

    pub fn primary_care_access(&self) -> Access {
        self.intake.primary_care_access
    }

    pub fn lacks_primary_care(&self) -> bool {
        self.intake.primary_care_access == Access::No
    }
}
