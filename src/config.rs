//! Environment configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! prefs_path = "~/.config/studio/optionVars.json"
//!
//! [host]
//! up_axis = "z"
//! min_time = 1.0
//! max_time = 240.0
//! construction_history = true
//! ```
//!
//! Every field is optional. Without `prefs_path` option variables live in
//! memory only.

use optionvars_core::{Error, Result, UpAxis};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file read by
/// [`EnvConfig::load_default`].
pub const CONFIG_ENV_VAR: &str = "OPTIONVARS_CONFIG";

/// Configuration for opening an [`Env`](crate::Env).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Preference file; `None` keeps option variables in memory
    pub prefs_path: Option<PathBuf>,
    /// Initial scene state for the headless host
    pub host: HostConfig,
}

/// Initial scene state for [`HeadlessHost`](crate::HeadlessHost).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// World up axis
    pub up_axis: UpAxis,
    /// Start of the playback range; also the initial current time
    pub min_time: f64,
    /// End of the playback range
    pub max_time: f64,
    /// Whether construction history is recorded
    pub construction_history: bool,
    /// User name override
    pub user: Option<String>,
    /// Host name override
    pub host_name: Option<String>,
    /// Open scene file
    pub scene: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            up_axis: UpAxis::Y,
            min_time: 1.0,
            max_time: 120.0,
            construction_history: true,
            user: None,
            host_name: None,
            scene: None,
        }
    }
}

impl EnvConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EnvConfig =
            toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load the file named by `OPTIONVARS_CONFIG`, or defaults if it is unset.
    pub fn load_default() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        let host = &self.host;
        if !host.min_time.is_finite() || !host.max_time.is_finite() {
            return Err(Error::Config("playback range must be finite".into()));
        }
        if host.min_time > host.max_time {
            return Err(Error::Config(format!(
                "min_time {} is after max_time {}",
                host.min_time, host.max_time
            )));
        }
        Ok(())
    }
}
