use serde::Serialize;
use tracing::info;

use carepath_core::models::evaluation::Evaluation;
use carepath_core::models::routing::{Route, Stage, Urgency};

pub mod action {
    pub const EVALUATE: &str = "triage.evaluate";
    pub const EXPLAIN: &str = "triage.explain";
    pub const EXPORT: &str = "triage.export";
}

/// A structured audit event for one action taken on an evaluation.
///
/// Events carry the decision (route, urgency, deciding stage) but never the
/// patient's answers; attach those through `details` only when the sink is
/// allowed to hold them.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub evaluation_id: String,
    pub route: Route,
    pub urgency: Urgency,
    pub decided_by: Stage,
    pub reason_count: usize,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, evaluation: &Evaluation) -> Self {
        Self {
            action: action.into(),
            evaluation_id: evaluation.id.to_string(),
            route: evaluation.result.route,
            urgency: evaluation.result.urgency,
            decided_by: evaluation.result.decided_by,
            reason_count: evaluation.result.reasons.len(),
            details: None,
        }
    }

    /// The event recorded once a routing decision is made.
    pub fn evaluation(evaluation: &Evaluation) -> Self {
        Self::new(action::EVALUATE, evaluation)
            .with_details(serde_json::json!({ "reasons": evaluation.result.reasons }))
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        info!(
            audit.action = %self.action,
            audit.evaluation_id = %self.evaluation_id,
            audit.route = %self.route,
            audit.urgency = %self.urgency,
            audit.decided_by = %self.decided_by,
            audit.reason_count = self.reason_count,
            audit.details = %details,
            "audit event"
        );
    }
}
