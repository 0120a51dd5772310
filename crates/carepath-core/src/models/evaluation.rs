use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::intake::IntakeRecord;
use crate::models::routing::RoutingResult;

/// One pass through the intake → routing pipeline, keyed for export and audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub evaluated_at: jiff::Timestamp,
    pub intake: IntakeRecord,
    pub result: RoutingResult,
}

impl Evaluation {
    pub fn new(intake: IntakeRecord, result: RoutingResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            evaluated_at: jiff::Timestamp::now(),
            intake,
            result,
        }
    }
}
