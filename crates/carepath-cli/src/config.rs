use std::path::{Path, PathBuf};

use carepath_narrative::generator::NarrativeSettings;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const ENV_NARRATIVE_MODEL: &str = "CAREPATH_NARRATIVE_MODEL";
pub const ENV_AWS_REGION: &str = "CAREPATH_AWS_REGION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarepathConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub narrative: NarrativeSettings,
    /// Where `--export` writes bundles when no directory is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for CarepathConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            created_at: jiff::Timestamp::now(),
            narrative: NarrativeSettings::default(),
            export_dir: None,
        }
    }
}

impl CarepathConfig {
    /// Apply `CAREPATH_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(model_id) = get(ENV_NARRATIVE_MODEL) {
            tracing::debug!(%model_id, "narrative model overridden from environment");
            self.narrative.model_id = Some(model_id);
        }
        if let Some(region) = get(ENV_AWS_REGION) {
            tracing::debug!(%region, "AWS region overridden from environment");
            self.narrative.region = region;
        }
        self
    }

    /// Destination for an export: the explicit directory, else the
    /// configured one, else the working directory.
    pub fn export_dir_or(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .or(self.export_dir.as_deref())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.carepath.cli"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config, falling back to defaults when none has been written.
pub fn load_or_default() -> eyre::Result<CarepathConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CarepathConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<CarepathConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CarepathConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update carepath."
        ));
    }

    // v0 → v1: flat `model_id` / `region` move under `narrative`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        let mut narrative = serde_json::Map::new();
        if let Some(model_id) = obj.remove("model_id") {
            narrative.insert("model_id".to_string(), model_id);
        }
        if let Some(region) = obj.remove("region") {
            narrative.insert("region".to_string(), region);
        }
        obj.entry("narrative")
            .or_insert(serde_json::Value::Object(narrative));
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested narrative settings)");
    }

    Ok(json)
}

pub fn save_config(config: &CarepathConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Write `config.json` into `dir`, returning its path.
pub fn save_config_in(dir: &Path, config: &CarepathConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
