//! Text generation backends.
//!
//! [`TextGenerator`] is the only seam the rest of the workspace depends on.
//! [`BedrockGenerator`] implements it over the Bedrock Converse API; tests
//! and offline runs plug in their own.

use std::future::Future;
use std::time::Duration;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::NarrativeError;

/// Prompt in, text out.
pub trait TextGenerator {
    fn generate(
        &self,
        system_prompt: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, NarrativeError>> + Send;
}

/// Where and how narratives are generated. Narratives stay off unless a
/// model is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeSettings {
    /// Bedrock inference profile ID, e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`.
    pub model_id: Option<String>,
    pub region: String,
    pub timeout_secs: u64,
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            model_id: None,
            region: "us-east-1".to_string(),
            timeout_secs: 20,
        }
    }
}

impl NarrativeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Build a Bedrock-backed generator if narratives are configured and AWS
/// credentials are available. Returns `None` otherwise.
pub async fn connect(settings: &NarrativeSettings) -> Option<BedrockGenerator> {
    let Some(model_id) = settings.model_id.as_deref() else {
        info!("narrative model not configured, explanations disabled");
        return None;
    };

    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()))
        .load()
        .await;

    if config.credentials_provider().is_none() {
        info!("no AWS credentials found, explanations disabled");
        return None;
    }

    Some(BedrockGenerator::new(&config, model_id))
}

pub struct BedrockGenerator {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl TextGenerator for BedrockGenerator {
    async fn generate(&self, system_prompt: &str, prompt: &str) -> Result<String, NarrativeError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| NarrativeError::Invocation(e.to_string()))?;

        // Low temperature: the model restates, it does not reason.
        let inference = InferenceConfiguration::builder()
            .temperature(0.2)
            .max_tokens(800)
            .build();

        info!(model_id = %self.model_id, "requesting narrative");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| NarrativeError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| NarrativeError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        info!(
            model_id = %self.model_id,
            text_len = text.len(),
            "narrative received"
        );

        Ok(text)
    }
}
