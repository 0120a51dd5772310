use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recommended care setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Route {
    #[serde(rename = "ED")]
    EmergencyDepartment,
    #[serde(rename = "Urgent Care")]
    UrgentCare,
    #[serde(rename = "PCP")]
    PrimaryCare,
    #[serde(rename = "Self-care")]
    SelfCare,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::EmergencyDepartment,
        Route::UrgentCare,
        Route::PrimaryCare,
        Route::SelfCare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::EmergencyDepartment => "ED",
            Route::UrgentCare => "Urgent Care",
            Route::PrimaryCare => "PCP",
            Route::SelfCare => "Self-care",
        }
    }

    /// Visual severity tier a presentation layer should use for this route.
    pub fn tier(self) -> DisplayTier {
        match self {
            Route::EmergencyDepartment => DisplayTier::Critical,
            Route::UrgentCare => DisplayTier::Warning,
            Route::PrimaryCare => DisplayTier::Info,
            Route::SelfCare => DisplayTier::Success,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Time-sensitivity attached to a route.
///
/// One-to-one with [`Route`] under the current rules, but kept separate so a
/// later rule revision can decouple them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Urgency {
    Immediate,
    #[serde(rename = "Same day")]
    SameDay,
    #[serde(rename = "24–72 hrs")]
    Within24To72Hours,
    Monitor,
}

impl Urgency {
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Immediate => "Immediate",
            Urgency::SameDay => "Same day",
            Urgency::Within24To72Hours => "24–72 hrs",
            Urgency::Monitor => "Monitor",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisplayTier {
    Critical,
    Warning,
    Info,
    Success,
}

/// Stage of the routing cascade that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Stage {
    /// Any global red-flag symptom.
    RedFlags,
    /// Low oxygen saturation.
    Vitals,
    /// Injury-specific cascade; terminal for injury complaints.
    Injury,
    /// Conservative escalation for high-risk combinations.
    HighRisk,
    /// Same-day triggers, all collected.
    UrgentCare,
    /// 24–72 hour triggers, all collected, rerouted without PCP access.
    PrimaryCare,
    /// Nothing fired.
    Default,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::RedFlags => "red_flags",
            Stage::Vitals => "vitals",
            Stage::Injury => "injury",
            Stage::HighRisk => "high_risk",
            Stage::UrgentCare => "urgent_care",
            Stage::PrimaryCare => "primary_care",
            Stage::Default => "default",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The engine's decision for one intake record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoutingResult {
    pub route: Route,
    pub urgency: Urgency,
    /// Justifications in the order their conditions were evaluated.
    pub reasons: Vec<String>,
    /// General escalation reminders, identical for every result.
    pub safety_notes: Vec<String>,
    pub decided_by: Stage,
}
