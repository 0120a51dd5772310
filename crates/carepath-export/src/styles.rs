use carepath_core::models::routing::DisplayTier;
use serde::{Deserialize, Serialize};

/// Fonts, sizes and the callout colour used in DOCX summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,
    /// Points.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    /// Hex RGB of the route banner (`> ...` lines).
    pub callout_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 13,
            callout_color: "404040".to_string(),
        }
    }
}

impl DocumentStyles {
    /// Same styles with the banner coloured for `tier`.
    pub fn for_tier(&self, tier: DisplayTier) -> Self {
        Self {
            callout_color: tier_color(tier).to_string(),
            ..self.clone()
        }
    }
}

pub fn tier_color(tier: DisplayTier) -> &'static str {
    match tier {
        DisplayTier::Critical => "C00000",
        DisplayTier::Warning => "C55A11",
        DisplayTier::Info => "2E74B5",
        DisplayTier::Success => "548235",
    }
}
