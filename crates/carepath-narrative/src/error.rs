use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned an empty explanation")]
    EmptyResponse,

    #[error("explanation contradicts the routing decision: {0}")]
    Contradiction(String),

    #[error("no explanation within {0:?}")]
    Timeout(Duration),
}
