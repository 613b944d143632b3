use std::path::{Path, PathBuf};

use carescore_core::models::patient::CareSetting;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_FACILITY_NAME: &str = "Healthcare Facility";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarescoreConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub facility_name: String,
    #[serde(default)]
    pub default_assessor: Option<String>,
    /// Added in v1.
    pub default_care_setting: CareSetting,
    pub created_at: jiff::Timestamp,
}

impl Default for CarescoreConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            facility_name: DEFAULT_FACILITY_NAME.to_string(),
            default_assessor: None,
            default_care_setting: CareSetting::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("carescore"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Default location of the assessment store (a backup-format JSON file).
pub fn default_store_path() -> eyre::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
    Ok(base.join("carescore").join("store.json"))
}

/// Load the config at `path`, or the defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<CarescoreConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config, using defaults");
        return Ok(CarescoreConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<CarescoreConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations operate on the raw document.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CarescoreConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update carescore."
        ));
    }

    // v0 → v1: add default_care_setting
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("default_care_setting")
            .or_insert(serde_json::Value::String(CareSetting::Hospital.as_str().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added default_care_setting)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CarescoreConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Saved files are always stamped with this build's version.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Facility name to print on reports: the override when one is set and
/// non-blank, otherwise the configured name.
pub fn effective_facility(config: &CarescoreConfig, override_name: Option<&str>) -> String {
    match override_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => config.facility_name.clone(),
    }
}
