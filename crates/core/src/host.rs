//! Host scene-state capability
//!
//! Pass-through accessors the environment exposes next to the option
//! variables. Each method is one synchronous call into the host application.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// World up direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    /// Y up
    #[default]
    Y,
    /// Z up
    Z,
}

impl UpAxis {
    /// Lowercase axis name
    pub fn as_str(&self) -> &'static str {
        match self {
            UpAxis::Y => "y",
            UpAxis::Z => "z",
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpAxis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "y" | "Y" => Ok(UpAxis::Y),
            "z" | "Z" => Ok(UpAxis::Z),
            other => Err(Error::InvalidUpAxis(other.to_string())),
        }
    }
}

/// Scene-state capability of the host application.
pub trait Host: Send + Sync {
    /// Current time
    fn current_time(&self) -> Result<f64>;

    /// Set the current time
    fn set_current_time(&self, time: f64) -> Result<()>;

    /// Start of the playback range
    fn min_time(&self) -> Result<f64>;

    /// Set the start of the playback range
    fn set_min_time(&self, time: f64) -> Result<()>;

    /// End of the playback range
    fn max_time(&self) -> Result<f64>;

    /// Set the end of the playback range
    fn set_max_time(&self, time: f64) -> Result<()>;

    /// Whether construction history is recorded
    fn construction_history(&self) -> Result<bool>;

    /// Toggle construction history
    fn set_construction_history(&self, enabled: bool) -> Result<()>;

    /// Path of the open scene, `None` while it has never been saved
    fn scene_name(&self) -> Result<Option<PathBuf>>;

    /// World up axis
    fn up_axis(&self) -> Result<UpAxis>;

    /// Set the world up axis, optionally rotating the view with it
    fn set_up_axis(&self, axis: UpAxis, rotate_view: bool) -> Result<()>;

    /// Name of the user running the host
    fn user(&self) -> Result<String>;

    /// Name of the machine running the host
    fn host_name(&self) -> Result<String>;
}
