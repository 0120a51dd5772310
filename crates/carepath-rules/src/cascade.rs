use carepath_core::models::intake::IntakeRecord;
use carepath_core::models::routing::{Route, RoutingResult, Stage, Urgency};
use carepath_core::models::vocabulary::{Access, InjuryFlag, RedFlag};

use crate::facts::Facts;
use crate::reasons;
use crate::triggers::{
    self, EMERGENT_INJURY_FLAGS, HIGH_RISK_COMBINATIONS, INJURY_SAME_DAY_SEVERITY,
    LOW_OXYGEN_THRESHOLD, PRIMARY_CARE_TRIGGERS, SAME_DAY_INJURY_FLAGS, URGENT_CARE_TRIGGERS,
};
use crate::SAFETY_NOTES;

/// What a stage decides when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub route: Route,
    pub urgency: Urgency,
    pub reasons: Vec<String>,
}

impl Decision {
    fn emergency(reasons: Vec<String>) -> Self {
        Self {
            route: Route::EmergencyDepartment,
            urgency: Urgency::Immediate,
            reasons,
        }
    }

    fn urgent_care(reasons: Vec<String>) -> Self {
        Self {
            route: Route::UrgentCare,
            urgency: Urgency::SameDay,
            reasons,
        }
    }

    fn primary_care(reasons: Vec<String>) -> Self {
        Self {
            route: Route::PrimaryCare,
            urgency: Urgency::Within24To72Hours,
            reasons,
        }
    }

    fn self_care(reason: &str) -> Self {
        Self {
            route: Route::SelfCare,
            urgency: Urgency::Monitor,
            reasons: vec![reason.to_string()],
        }
    }
}

/// One entry of the cascade: a stage and the function that decides it.
/// `decide` returns `None` when the stage does not fire.
#[derive(Debug, Clone, Copy)]
pub struct StageRule {
    pub stage: Stage,
    pub decide: fn(&Facts<'_>) -> Option<Decision>,
}

/// The routing cascade, highest priority first. The first stage that fires
/// wins; [`Stage::Default`] applies when none does.
pub const CASCADE: &[StageRule] = &[
    StageRule {
        stage: Stage::RedFlags,
        decide: red_flags,
    },
    StageRule {
        stage: Stage::Vitals,
        decide: vitals,
    },
    StageRule {
        stage: Stage::Injury,
        decide: injury,
    },
    StageRule {
        stage: Stage::HighRisk,
        decide: high_risk,
    },
    StageRule {
        stage: Stage::UrgentCare,
        decide: urgent_care,
    },
    StageRule {
        stage: Stage::PrimaryCare,
        decide: primary_care,
    },
];

/// Stages in evaluation order, ending with the fallback.
pub fn cascade() -> Vec<Stage> {
    CASCADE
        .iter()
        .map(|rule| rule.stage)
        .chain(std::iter::once(Stage::Default))
        .collect()
}

/// Route one intake record. Total: every record gets a result.
pub fn evaluate(intake: &IntakeRecord) -> RoutingResult {
    let facts = Facts::new(intake);

    let (stage, decision) = CASCADE
        .iter()
        .find_map(|rule| (rule.decide)(&facts).map(|decision| (rule.stage, decision)))
        .unwrap_or_else(|| (Stage::Default, Decision::self_care(reasons::NO_ESCALATION)));

    RoutingResult {
        route: decision.route,
        urgency: decision.urgency,
        reasons: decision.reasons,
        safety_notes: SAFETY_NOTES.iter().map(|note| note.to_string()).collect(),
        decided_by: stage,
    }
}

fn red_flags(facts: &Facts<'_>) -> Option<Decision> {
    if !facts.any_red_flag() {
        return None;
    }

    let mut reasons = vec![reasons::RED_FLAGS_SELECTED.to_string()];
    if facts.has_red_flag(RedFlag::UncontrolledBleeding)
        || facts.has_any_injury_flag(&[InjuryFlag::UnstoppableBleeding])
    {
        reasons.push(reasons::UNCONTROLLED_BLEEDING.to_string());
    }
    Some(Decision::emergency(reasons))
}

fn vitals(facts: &Facts<'_>) -> Option<Decision> {
    let saturation = facts.oxygen_saturation()?;
    (saturation < LOW_OXYGEN_THRESHOLD)
        .then(|| Decision::emergency(vec![reasons::low_oxygen(saturation)]))
}

/// Terminal for injury complaints: always decides once entered.
fn injury(facts: &Facts<'_>) -> Option<Decision> {
    if !facts.intake().is_injury() {
        return None;
    }

    if facts.has_any_injury_flag(&EMERGENT_INJURY_FLAGS) {
        return Some(Decision::emergency(vec![
            reasons::INJURY_EMERGENT.to_string(),
        ]));
    }

    if facts.has_any_injury_flag(&SAME_DAY_INJURY_FLAGS)
        || facts.severity() >= INJURY_SAME_DAY_SEVERITY
    {
        return Some(Decision::urgent_care(vec![
            reasons::INJURY_SAME_DAY.to_string(),
        ]));
    }

    Some(Decision::self_care(reasons::INJURY_MILD))
}

fn high_risk(facts: &Facts<'_>) -> Option<Decision> {
    HIGH_RISK_COMBINATIONS
        .iter()
        .find(|combination| combination.holds(facts))
        .map(|combination| Decision::emergency(vec![combination.reason.to_string()]))
}

fn urgent_care(facts: &Facts<'_>) -> Option<Decision> {
    let reasons = triggers::collect(URGENT_CARE_TRIGGERS, facts);
    (!reasons.is_empty()).then(|| Decision::urgent_care(reasons))
}

/// Lack of PCP access reroutes to urgent care; it never blocks escalation.
fn primary_care(facts: &Facts<'_>) -> Option<Decision> {
    let mut reasons = triggers::collect(PRIMARY_CARE_TRIGGERS, facts);
    if reasons.is_empty() {
        return None;
    }

    match facts.primary_care_access() {
        Access::Yes => Some(Decision::primary_care(reasons)),
        Access::No => {
            reasons.push(reasons::NO_PCP_REROUTE.to_string());
            Some(Decision::urgent_care(reasons))
        }
    }
}
