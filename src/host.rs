//! Headless host.
//!
//! An in-process [`Host`] for running without a host application: batch
//! jobs, tools and tests. Scene state lives in a `parking_lot::Mutex` and
//! starts from [`HostConfig`].

use crate::config::HostConfig;
use optionvars_core::{Host, Result, UpAxis};
use parking_lot::Mutex;
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct SceneState {
    time: f64,
    min_time: f64,
    max_time: f64,
    construction_history: bool,
    scene: Option<PathBuf>,
    up_axis: UpAxis,
}

/// In-process scene state standing in for a host application.
#[derive(Debug)]
pub struct HeadlessHost {
    state: Mutex<SceneState>,
    user: String,
    host_name: String,
}

impl HeadlessHost {
    /// Create a headless host with default scene state.
    pub fn new() -> Self {
        Self::from_config(&HostConfig::default())
    }

    /// Create a headless host from configuration.
    ///
    /// Without overrides the user comes from the `USER`/`USERNAME`
    /// environment variables and the host name from the operating system.
    pub fn from_config(config: &HostConfig) -> Self {
        let user = config
            .user
            .clone()
            .or_else(|| env_var(&["USER", "USERNAME"]))
            .unwrap_or_else(|| "unknown".to_string());
        let host_name = config
            .host_name
            .clone()
            .or_else(system_host_name)
            .unwrap_or_else(|| "localhost".to_string());

        Self {
            state: Mutex::new(SceneState {
                time: config.min_time,
                min_time: config.min_time,
                max_time: config.max_time,
                construction_history: config.construction_history,
                scene: config.scene.clone(),
                up_axis: config.up_axis,
            }),
            user,
            host_name,
        }
    }

    /// Point the session at a saved scene file, or back to an unsaved one.
    pub fn open_scene(&self, path: Option<PathBuf>) {
        self.state.lock().scene = path;
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

fn env_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}

fn system_host_name() -> Option<String> {
    let name = gethostname::gethostname().to_string_lossy().into_owned();
    (!name.is_empty()).then_some(name)
}

impl Host for HeadlessHost {
    fn current_time(&self) -> Result<f64> {
        Ok(self.state.lock().time)
    }

    fn set_current_time(&self, time: f64) -> Result<()> {
        self.state.lock().time = time;
        Ok(())
    }

    fn min_time(&self) -> Result<f64> {
        Ok(self.state.lock().min_time)
    }

    fn set_min_time(&self, time: f64) -> Result<()> {
        self.state.lock().min_time = time;
        Ok(())
    }

    fn max_time(&self) -> Result<f64> {
        Ok(self.state.lock().max_time)
    }

    fn set_max_time(&self, time: f64) -> Result<()> {
        self.state.lock().max_time = time;
        Ok(())
    }

    fn construction_history(&self) -> Result<bool> {
        Ok(self.state.lock().construction_history)
    }

    fn set_construction_history(&self, enabled: bool) -> Result<()> {
        self.state.lock().construction_history = enabled;
        Ok(())
    }

    fn scene_name(&self) -> Result<Option<PathBuf>> {
        Ok(self.state.lock().scene.clone())
    }

    fn up_axis(&self) -> Result<UpAxis> {
        Ok(self.state.lock().up_axis)
    }

    // No viewport to rotate headless.
    fn set_up_axis(&self, axis: UpAxis, _rotate_view: bool) -> Result<()> {
        self.state.lock().up_axis = axis;
        Ok(())
    }

    fn user(&self) -> Result<String> {
        Ok(self.user.clone())
    }

    fn host_name(&self) -> Result<String> {
        Ok(self.host_name.clone())
    }
}
