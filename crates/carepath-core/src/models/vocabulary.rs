//! Closed option lists offered by the intake form.
//!
//! Each option serializes as the exact label the patient sees, so a JSON dump
//! of an intake record reads like the form itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Declare a closed vocabulary: an enum whose variants carry their wire label,
/// plus `ALL` (form order), `label()`, and `Display`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

vocabulary! {
    /// The patient-selected primary reason for the encounter.
    pub enum ChiefComplaint {
        ChestPain => "Chest pain / pressure",
        ShortnessOfBreath => "Shortness of breath",
        AbdominalPain => "Abdominal pain",
        Headache => "Headache",
        Fever => "Fever / infection symptoms",
        CoughSoreThroat => "Cough / sore throat",
        Urinary => "Urinary symptoms",
        BackPain => "Back pain",
        RashSkin => "Rash / skin issue",
        Gastrointestinal => "Nausea / vomiting / diarrhea",
        InjuryWound => "Injury / wound",
        Other => "Other",
    }
}

vocabulary! {
    pub enum Onset {
        UnderSixHours => "< 6 hours",
        SixTo24Hours => "6–24 hours",
        OneToThreeDays => "1–3 days",
        FourToSevenDays => "4–7 days",
        OverSevenDays => "> 7 days",
    }
}

vocabulary! {
    pub enum Trend {
        Better => "Better",
        Same => "Same",
        Worse => "Worse",
    }
}

impl Trend {
    /// Not getting worse.
    pub fn is_stable(self) -> bool {
        matches!(self, Trend::Same | Trend::Better)
    }
}

vocabulary! {
    /// Current fever (≥100.4°F / 38°C).
    pub enum Fever {
        Yes => "Yes",
        No => "No",
        Unknown => "Don’t know / can’t check",
    }
}

vocabulary! {
    pub enum Sex {
        Female => "Female",
        Male => "Male",
        Intersex => "Intersex",
        PreferNotToSay => "Prefer not to say",
    }
}

vocabulary! {
    /// Pregnant, or could be pregnant.
    pub enum Pregnancy {
        Yes => "Yes",
        No => "No",
        NotApplicable => "Not applicable",
    }
}

vocabulary! {
    /// Whether a care option is reachable for the patient.
    pub enum Access {
        Yes => "Yes",
        No => "No",
    }
}

vocabulary! {
    /// Medical-history risk conditions.
    pub enum RiskCondition {
        HeartDisease => "Heart disease / prior heart attack",
        StrokeTia => "Stroke / TIA history",
        Diabetes => "Diabetes",
        ChronicLungDisease => "Chronic lung disease (asthma/COPD)",
        KidneyDisease => "Kidney disease",
        Immunocompromised => "Immunocompromised (chemo, transplant, HIV, long-term steroids)",
        /// Sentinel: selecting it empties the whole set.
        NoneOfTheAbove => "None of the above",
    }
}

vocabulary! {
    /// Global emergency symptoms, checked regardless of chief complaint.
    pub enum RedFlag {
        TroubleBreathingAtRest => "Trouble breathing at rest",
        Fainting => "Fainting / nearly fainted",
        NewConfusion => "New confusion",
        SevereChestPain => "Severe chest pain/pressure",
        BlueLipsFace => "Blue lips/face",
        UncontrolledBleeding => "Uncontrolled bleeding",
        StrokeSigns => "Signs of stroke (face droop, arm weakness, speech trouble)",
        SevereAllergicReaction => "Severe allergic reaction (swelling of lips/tongue, hives + breathing trouble)",
        SevereDehydration => "Severe dehydration (unable to keep fluids down, very little urine)",
        RigidAbdomen => "Severe abdominal pain with rigid belly",
        ThunderclapHeadache => "Worst headache of life / sudden thunderclap headache",
        FeverStiffNeckRash => "High fever with stiff neck or rash",
        PregnancyBleedingPain => "Pregnancy + bleeding or severe abdominal pain",
    }
}

vocabulary! {
    /// Injury-severity indicators, only collected for the injury complaint.
    pub enum InjuryFlag {
        SevereSwelling => "Severe swelling",
        ObviousDeformity => "Obvious deformity",
        CannotBearWeight => "Unable to bear weight or use limb",
        NumbnessTingling => "Numbness or tingling",
        DeepOpenWound => "Bone visible or deep open wound",
        UnstoppableBleeding => "Bleeding that won’t stop after 10 minutes of firm pressure",
    }
}

vocabulary! {
    pub enum InjuryType {
        Joint => "Joint (ankle, knee, shoulder, wrist, etc.)",
        MuscleStrain => "Muscle strain / pull",
        Laceration => "Cut / laceration",
        Burn => "Burn",
        BruiseSwelling => "Bruise / swelling",
        Unsure => "Unsure",
    }
}

vocabulary! {
    pub enum InjuryLocation {
        Ankle => "Ankle",
        Knee => "Knee",
        Wrist => "Wrist",
        Shoulder => "Shoulder",
        Hand => "Hand",
        Foot => "Foot",
        Head => "Head",
        Other => "Other",
    }
}

vocabulary! {
    pub enum InjuryMechanism {
        Sports => "Sports / exercise",
        Fall => "Fall",
        Accident => "Accident",
        SharpObject => "Cut / sharp object",
        Other => "Other",
    }
}

/// Answer to "has this same problem happened before?".
///
/// Kept as free text: rules only look at whether the answer starts with
/// "Yes" or "No". The match is a plain prefix, so "Not sure" counts as a
/// first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HappenedBefore(String);

impl HappenedBefore {
    pub const RECURRENT: &'static str = "Yes — similar symptoms before";
    pub const FIRST_TIME: &'static str = "No — first time";
    pub const NOT_SURE: &'static str = "Not sure";

    pub fn new(answer: impl Into<String>) -> Self {
        Self(answer.into())
    }

    pub fn recurrent() -> Self {
        Self::new(Self::RECURRENT)
    }

    pub fn first_time() -> Self {
        Self::new(Self::FIRST_TIME)
    }

    pub fn not_sure() -> Self {
        Self::new(Self::NOT_SURE)
    }

    pub fn is_recurrent(&self) -> bool {
        self.0.starts_with("Yes")
    }

    pub fn is_first_time(&self) -> bool {
        self.0.starts_with("No")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HappenedBefore {
    fn default() -> Self {
        Self::not_sure()
    }
}

impl fmt::Display for HappenedBefore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
