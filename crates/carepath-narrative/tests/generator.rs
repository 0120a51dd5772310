use aws_config::{BehaviorVersion, SdkConfig};
use carepath_narrative::generator::{connect, BedrockGenerator, NarrativeSettings};

#[test]
fn generator_keeps_its_model_id() {
    let config = SdkConfig::builder()
        .behavior_version(BehaviorVersion::latest())
        .build();
    let generator = BedrockGenerator::new(&config, "us.anthropic.claude-sonnet-4-20250514-v1:0");
    assert_eq!(
        generator.model_id(),
        "us.anthropic.claude-sonnet-4-20250514-v1:0"
    );
}

#[tokio::test]
async fn no_model_means_no_generator() {
    assert!(connect(&NarrativeSettings::default()).await.is_none());
}

#[test]
fn settings_fill_missing_fields_with_defaults() {
    let settings: NarrativeSettings = serde_json::from_str(r#"{ "model_id": "m" }"#).unwrap();
    assert_eq!(settings.model_id.as_deref(), Some("m"));
    assert_eq!(settings.region, "us-east-1");
    assert_eq!(settings.timeout().as_secs(), 20);
}
