use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Version written by this build. Raising it requires appending a step to
/// `MIGRATIONS`.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarepathConfig {
    /// Absent in files written before versioning, which read as 0.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1, replacing the v0 `json_logs` boolean.
    #[serde(default)]
    pub log_format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Pretty-print the summary JSON written to stdout.
    #[serde(default)]
    pub pretty_output: bool,
    #[serde(default = "jiff::Timestamp::now")]
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for CarepathConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            log_format: LogFormat::default(),
            log_filter: default_log_filter(),
            pretty_output: false,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join("carepath"))
        .ok_or_else(|| eyre::eyre!("platform has no config directory"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Load the config at `path`, or defaults if no file exists there.
pub fn load_config(path: &Path) -> eyre::Result<CarepathConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CarepathConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("cannot read config {}: {e}", path.display()))?;

    // Migrations operate on untyped JSON; only the result is deserialized.
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let version = value
        .get("config_version")
        .and_then(serde_json::Value::as_u64)
        .map_or(0, |v| v as u32);

    Ok(serde_json::from_value(migrate(value, version)?)?)
}

type Migration = fn(&mut serde_json::Map<String, serde_json::Value>);

/// Migration `i` upgrades a version-`i` document to version `i + 1`.
const MIGRATIONS: [Migration; CURRENT_VERSION as usize] = [json_logs_to_log_format];

/// v0 stored a `json_logs` boolean; v1 names the format.
fn json_logs_to_log_format(obj: &mut serde_json::Map<String, serde_json::Value>) {
    let json_logs = obj
        .remove("json_logs")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let format = if json_logs { LogFormat::Json } else { LogFormat::Pretty };
    obj.insert(
        "log_format".to_string(),
        serde_json::Value::String(format.as_str().to_string()),
    );
}

/// Upgrade a config document from `from_version` to [`CURRENT_VERSION`],
/// one step at a time.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}); \
             upgrade carepath to read it"
        ));
    }
    if from_version == CURRENT_VERSION {
        return Ok(json);
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config must be a JSON object"))?;
    for (step, migration) in MIGRATIONS.iter().enumerate().skip(from_version as usize) {
        migration(obj);
        tracing::info!(from = step, to = step + 1, "migrated config");
    }
    obj.insert(
        "config_version".to_string(),
        serde_json::Value::from(CURRENT_VERSION),
    );
    Ok(json)
}

/// Write `config` to `path`, stamped with [`CURRENT_VERSION`].
pub fn save_config(config: &CarepathConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let body = serde_json::to_string_pretty(&CarepathConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    })?;

    // Readers never see a half-written file.
    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, body)?;
    std::fs::rename(&staging, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
