use std::time::Duration;

use carepath_core::models::intake::IntakeRecord;
use carepath_core::models::routing::{Route, RoutingResult};
use tracing::{info, warn};

use crate::error::NarrativeError;
use crate::generator::TextGenerator;
use crate::prompt::{self, DISCLAIMER, HEADER_PREFIX};

/// Shown in place of an explanation whenever one cannot be produced.
pub const UNAVAILABLE_NOTICE: &str =
    "Explanation unavailable right now. The routing decision above is unaffected.";

/// Outcome of an explanation request. Never an error: failures become
/// [`Narrative::Unavailable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrative {
    Generated(String),
    Unavailable(String),
}

impl Narrative {
    pub fn text(&self) -> &str {
        match self {
            Narrative::Generated(text) | Narrative::Unavailable(text) => text,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Narrative::Generated(_))
    }
}

/// Ask `generator` to explain a finished routing decision.
///
/// The result is only borrowed; nothing here can alter it. Timeouts, service
/// errors, empty replies, and replies naming another route all fall back to
/// [`UNAVAILABLE_NOTICE`].
pub async fn explain<G: TextGenerator>(
    generator: &G,
    intake: &IntakeRecord,
    result: &RoutingResult,
    timeout: Duration,
) -> Narrative {
    let system_prompt = prompt::build_system_prompt();
    let user_prompt = prompt::build_user_prompt(intake, result);

    let reply = match tokio::time::timeout(timeout, generator.generate(&system_prompt, &user_prompt))
        .await
    {
        Ok(reply) => reply,
        Err(_) => Err(NarrativeError::Timeout(timeout)),
    };

    match reply.and_then(|text| conform(&text, result)) {
        Ok(text) => {
            info!(route = %result.route, "narrative generated");
            Narrative::Generated(text)
        }
        Err(e) => {
            warn!(error = %e, "narrative unavailable");
            Narrative::Unavailable(UNAVAILABLE_NOTICE.to_string())
        }
    }
}

/// Check a model reply against the decision and normalize its framing.
///
/// The opening line and any "Recommended care setting:" line may name only
/// the decided route. A missing header or disclaimer is added.
pub fn conform(text: &str, result: &RoutingResult) -> Result<String, NarrativeError> {
    let body = text.trim();
    if body.is_empty() {
        return Err(NarrativeError::EmptyResponse);
    }

    let first_line = body.lines().next().unwrap_or_default();
    let decision_lines = body
        .lines()
        .filter(|line| line.trim_start().starts_with(HEADER_PREFIX));

    for line in std::iter::once(first_line).chain(decision_lines) {
        if let Some(other) = mentioned_routes(line)
            .into_iter()
            .find(|route| *route != result.route)
        {
            return Err(NarrativeError::Contradiction(format!(
                "reply names {other}, decision is {}",
                result.route
            )));
        }
    }

    let mut conformed = String::new();
    if !first_line.trim_start().starts_with(HEADER_PREFIX) {
        conformed.push_str(&prompt::header_line(result));
        conformed.push_str("\n\n");
    }
    conformed.push_str(body);
    if !body.ends_with(DISCLAIMER) {
        conformed.push_str("\n\n");
        conformed.push_str(DISCLAIMER);
    }
    Ok(conformed)
}

/// Routes a line refers to by name.
fn mentioned_routes(line: &str) -> Vec<Route> {
    let lower = line.to_lowercase();
    let has_word = |word: &str| {
        line.split(|c: char| !c.is_alphanumeric())
            .any(|token| token == word)
    };

    Route::ALL
        .into_iter()
        .filter(|route| match route {
            Route::EmergencyDepartment => has_word("ED") || lower.contains("emergency department"),
            Route::UrgentCare => lower.contains("urgent care"),
            Route::PrimaryCare => has_word("PCP") || lower.contains("primary care"),
            Route::SelfCare => lower.contains("self-care") || lower.contains("self care"),
        })
        .collect()
}
