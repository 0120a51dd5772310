//! Rule tables. Order inside each table is evaluation order and therefore
//! reason order.

use carepath_core::models::vocabulary::{ChiefComplaint, InjuryFlag, RiskCondition};

use crate::facts::Facts;
use crate::reasons;

/// A single predicate with the sentence it contributes when it holds.
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    pub reason: &'static str,
    pub applies: fn(&Facts<'_>) -> bool,
}

impl Trigger {
    pub fn holds(&self, facts: &Facts<'_>) -> bool {
        (self.applies)(facts)
    }
}

/// Collect the reasons of every trigger in `table` that holds, in table order.
pub fn collect(table: &[Trigger], facts: &Facts<'_>) -> Vec<String> {
    table
        .iter()
        .filter(|trigger| trigger.holds(facts))
        .map(|trigger| trigger.reason.to_string())
        .collect()
}

/// Injury flags that send an injury straight to the ED.
pub const EMERGENT_INJURY_FLAGS: [InjuryFlag; 4] = [
    InjuryFlag::ObviousDeformity,
    InjuryFlag::DeepOpenWound,
    InjuryFlag::UnstoppableBleeding,
    InjuryFlag::NumbnessTingling,
];

/// Injury flags that warrant same-day care.
pub const SAME_DAY_INJURY_FLAGS: [InjuryFlag; 2] =
    [InjuryFlag::CannotBearWeight, InjuryFlag::SevereSwelling];

/// Injury pain at or above this goes to urgent care even without flags.
pub const INJURY_SAME_DAY_SEVERITY: u8 = 6;

/// Oxygen saturation below this is an ED hard-stop.
pub const LOW_OXYGEN_THRESHOLD: u32 = 92;

/// Conservative ED escalations. Each is sufficient on its own; the first one
/// that holds supplies the only reason.
pub const HIGH_RISK_COMBINATIONS: &[Trigger] = &[
    Trigger {
        reason: reasons::CHEST_PAIN_CARDIAC_HISTORY,
        applies: |f| {
            f.complaint() == ChiefComplaint::ChestPain
                && f.has_condition(RiskCondition::HeartDisease)
        },
    },
    Trigger {
        reason: reasons::BREATHLESS_LUNG_DISEASE_WORSENING,
        applies: |f| {
            f.complaint() == ChiefComplaint::ShortnessOfBreath
                && f.has_condition(RiskCondition::ChronicLungDisease)
                && f.worsening()
        },
    },
    Trigger {
        reason: reasons::SEVERE_FIRST_HEADACHE,
        applies: |f| {
            f.complaint() == ChiefComplaint::Headache && f.severity() >= 7 && f.first_time()
        },
    },
    Trigger {
        reason: reasons::FEVER_IMMUNOCOMPROMISED_SEVERE,
        applies: |f| f.has_fever() && f.immunocompromised() && f.severity() >= 7,
    },
];

/// Same-day triggers. Every one that holds is reported.
pub const URGENT_CARE_TRIGGERS: &[Trigger] = &[
    Trigger {
        reason: reasons::HIGH_SEVERITY,
        applies: |f| f.severity() >= 6,
    },
    Trigger {
        reason: reasons::WORSENING,
        applies: |f| f.worsening(),
    },
    Trigger {
        reason: reasons::FEVER_IMMUNOCOMPROMISED,
        applies: |f| f.has_fever() && f.immunocompromised(),
    },
    Trigger {
        reason: reasons::FIRST_TIME_MODERATE,
        applies: |f| f.first_time() && f.severity() >= 5,
    },
    Trigger {
        reason: reasons::PREGNANCY_FEVER,
        applies: |f| f.pregnant() && f.has_fever(),
    },
    Trigger {
        reason: reasons::NO_PCP_NEEDS_ASSESSMENT,
        applies: |f| {
            f.lacks_primary_care() && (f.severity() >= 5 || f.has_fever() || f.worsening())
        },
    },
];

/// 24–72 hour triggers. Every one that holds is reported.
pub const PRIMARY_CARE_TRIGGERS: &[Trigger] = &[
    Trigger {
        reason: reasons::STABLE_MILD_MODERATE,
        applies: |f| f.stable() && (3..=5).contains(&f.severity()),
    },
    Trigger {
        reason: reasons::STABLE_RECURRENT,
        applies: |f| f.recurrent() && f.stable(),
    },
    Trigger {
        reason: reasons::STABLE_FEVER,
        applies: |f| f.has_fever() && f.stable() && f.severity() <= 5,
    },
];
