use std::collections::HashMap;
use std::path::{Path, PathBuf};

use carepath_cli::config::{
    load_config_from, migrate, save_config_in, CarepathConfig, CURRENT_VERSION,
    ENV_AWS_REGION, ENV_NARRATIVE_MODEL,
};

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CarepathConfig::default();
    config.narrative.model_id = Some("us.anthropic.claude-sonnet-4-20250514-v1:0".to_string());
    config.export_dir = Some(PathBuf::from("/tmp/triage"));

    let path = save_config_in(dir.path(), &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_in(dir.path(), &CarepathConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = CarepathConfig {
        config_version: 0,
        ..CarepathConfig::default()
    };

    let path = save_config_in(dir.path(), &config).unwrap();
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], CURRENT_VERSION);
}

#[test]
fn v0_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "created_at": "2025-03-01T12:00:00Z",
            "model_id": "anthropic.claude-3-haiku",
            "region": "eu-west-1"
        }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();

    assert_eq!(config.config_version, 1);
    assert_eq!(
        config.narrative.model_id.as_deref(),
        Some("anthropic.claude-3-haiku")
    );
    assert_eq!(config.narrative.region, "eu-west-1");
    assert_eq!(config.narrative.timeout_secs, 20);
}

#[test]
fn migration_fills_missing_fields() {
    let migrated = migrate(serde_json::json!({}), 0).unwrap();
    let config: CarepathConfig = serde_json::from_value(migrated).unwrap();

    assert_eq!(config.narrative.model_id, None);
    assert_eq!(config.narrative.region, "us-east-1");
    assert_eq!(config.export_dir, None);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(serde_json::json!({ "config_version": 99 }), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2, 3]), 0).is_err());
}

#[test]
fn env_overrides_replace_narrative_settings() {
    let env = HashMap::from([
        (ENV_NARRATIVE_MODEL, "override-model".to_string()),
        (ENV_AWS_REGION, "ap-southeast-2".to_string()),
    ]);

    let config = CarepathConfig::default().with_overrides(|key| env.get(key).cloned());

    assert_eq!(config.narrative.model_id.as_deref(), Some("override-model"));
    assert_eq!(config.narrative.region, "ap-southeast-2");
}

#[test]
fn blank_env_overrides_are_ignored() {
    let mut base = CarepathConfig::default();
    base.narrative.model_id = Some("configured".to_string());

    let config = base.with_overrides(|_| Some("  ".to_string()));

    assert_eq!(config.narrative.model_id.as_deref(), Some("configured"));
    assert_eq!(config.narrative.region, "us-east-1");
}

#[test]
fn export_dir_prefers_explicit_then_configured() {
    let mut config = CarepathConfig::default();
    assert_eq!(config.export_dir_or(None), PathBuf::from("."));

    config.export_dir = Some(PathBuf::from("/var/triage"));
    assert_eq!(config.export_dir_or(None), PathBuf::from("/var/triage"));
    assert_eq!(
        config.export_dir_or(Some(Path::new("out"))),
        PathBuf::from("out")
    );
}
