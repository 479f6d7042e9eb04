//! The process environment.
//!
//! [`Env`] bundles the option-variable store with the host's scene-state
//! accessors. Both sit on process-global host resources, so one instance per
//! process is installed in a `OnceCell`:
//!
//! - [`Env::global`] returns the installed instance, creating an in-memory
//!   one on first use.
//! - [`EnvBuilder::install`] opens a configured instance and installs it. If
//!   an instance already exists it is returned unchanged.
//!
//! Library code should prefer taking an `&Env` (or `&OptionVars`) parameter;
//! [`EnvBuilder::open`] builds an uninstalled instance for that.

use crate::config::{EnvConfig, HostConfig};
use crate::host::HeadlessHost;
use once_cell::sync::OnceCell;
use optionvars_core::{Host, KeyValueBackend, Result, UpAxis};
use optionvars_primitives::OptionVars;
use optionvars_storage::{FileBackend, MemoryBackend};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

static GLOBAL: OnceCell<Env> = OnceCell::new();

/// Option variables plus host scene state.
pub struct Env {
    option_vars: OptionVars,
    host: Arc<dyn Host>,
}

impl Env {
    /// Create an environment from explicit capabilities.
    pub fn new(backend: Arc<dyn KeyValueBackend>, host: Arc<dyn Host>) -> Self {
        Self {
            option_vars: OptionVars::new(backend),
            host,
        }
    }

    /// Create an environment with in-memory option variables and a headless host.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), Arc::new(HeadlessHost::new()))
    }

    /// Create a builder for environment configuration.
    pub fn builder() -> EnvBuilder {
        EnvBuilder::new()
    }

    /// The process-wide environment.
    ///
    /// Creates an ephemeral environment on first use if none was installed.
    pub fn global() -> &'static Env {
        GLOBAL.get_or_init(|| {
            info!("installing ephemeral environment");
            Env::ephemeral()
        })
    }

    /// Check if a process-wide environment exists yet.
    pub fn is_installed() -> bool {
        GLOBAL.get().is_some()
    }

    /// The option-variable store
    pub fn option_vars(&self) -> &OptionVars {
        &self.option_vars
    }

    /// The host capability
    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Current time
    pub fn time(&self) -> Result<f64> {
        self.host.current_time()
    }

    /// Set the current time
    pub fn set_time(&self, time: f64) -> Result<()> {
        self.host.set_current_time(time)
    }

    /// Start of the playback range
    pub fn min_time(&self) -> Result<f64> {
        self.host.min_time()
    }

    /// Set the start of the playback range
    pub fn set_min_time(&self, time: f64) -> Result<()> {
        self.host.set_min_time(time)
    }

    /// End of the playback range
    pub fn max_time(&self) -> Result<f64> {
        self.host.max_time()
    }

    /// Set the end of the playback range
    pub fn set_max_time(&self, time: f64) -> Result<()> {
        self.host.set_max_time(time)
    }

    // =========================================================================
    // Scene
    // =========================================================================

    /// Whether construction history is recorded
    pub fn construction_history(&self) -> Result<bool> {
        self.host.construction_history()
    }

    /// Toggle construction history
    pub fn set_construction_history(&self, enabled: bool) -> Result<()> {
        self.host.set_construction_history(enabled)
    }

    /// Path of the open scene, `None` if it was never saved
    pub fn scene_name(&self) -> Result<Option<PathBuf>> {
        self.host.scene_name()
    }

    /// World up axis
    pub fn up_axis(&self) -> Result<UpAxis> {
        self.host.up_axis()
    }

    /// Set the world up axis, optionally rotating the view with it
    pub fn set_up_axis(&self, axis: UpAxis, rotate_view: bool) -> Result<()> {
        self.host.set_up_axis(axis, rotate_view)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Name of the user running the session
    pub fn user(&self) -> Result<String> {
        self.host.user()
    }

    /// Name of the machine running the session
    pub fn host_name(&self) -> Result<String> {
        self.host.host_name()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("option_vars", &self.option_vars)
            .finish_non_exhaustive()
    }
}

/// Builder for environment configuration.
///
/// # Example
///
/// ```ignore
/// // Durable preferences, installed process-wide
/// let env = Env::builder()
///     .prefs_path("~/.config/studio/optionVars.json")
///     .install()?;
///
/// // Tests: in-memory, passed around explicitly
/// let env = Env::builder().ephemeral().open()?;
/// ```
#[derive(Default)]
pub struct EnvBuilder {
    config: EnvConfig,
    backend: Option<Arc<dyn KeyValueBackend>>,
    host: Option<Arc<dyn Host>>,
}

impl EnvBuilder {
    /// Create a builder with default settings (in-memory, headless).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn config(mut self, config: EnvConfig) -> Self {
        self.config = config;
        self
    }

    /// Keep option variables in the preference file at `path`.
    pub fn prefs_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.prefs_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep option variables in memory only.
    pub fn ephemeral(mut self) -> Self {
        self.config.prefs_path = None;
        self
    }

    /// Initial scene state for the headless host.
    pub fn host_config(mut self, host: HostConfig) -> Self {
        self.config.host = host;
        self
    }

    /// Use a custom preference backend. Overrides `prefs_path`.
    pub fn backend(mut self, backend: Arc<dyn KeyValueBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Use a custom host. Overrides the headless host configuration.
    pub fn host(mut self, host: Arc<dyn Host>) -> Self {
        self.host = Some(host);
        self
    }

    /// Open an environment without installing it.
    pub fn open(self) -> Result<Env> {
        self.config.validate()?;

        let backend: Arc<dyn KeyValueBackend> = match (self.backend, &self.config.prefs_path) {
            (Some(backend), _) => backend,
            (None, Some(path)) => Arc::new(FileBackend::open(path)?),
            (None, None) => Arc::new(MemoryBackend::new()),
        };
        let host: Arc<dyn Host> = match self.host {
            Some(host) => host,
            None => Arc::new(HeadlessHost::from_config(&self.config.host)),
        };
        Ok(Env::new(backend, host))
    }

    /// Open the environment and install it process-wide.
    ///
    /// If an environment is already installed, nothing is opened and the
    /// existing instance is returned.
    pub fn install(self) -> Result<&'static Env> {
        if let Some(env) = GLOBAL.get() {
            warn!("environment already installed; keeping the existing instance");
            return Ok(env);
        }
        GLOBAL.get_or_try_init(|| {
            let prefs = self.config.prefs_path.clone();
            let env = self.open()?;
            match prefs {
                Some(path) => info!(prefs = %path.display(), "installed environment"),
                None => info!("installed environment"),
            }
            Ok(env)
        })
    }
}

/// The process-wide environment. Shorthand for [`Env::global`].
pub fn env() -> &'static Env {
    Env::global()
}

/// The process-wide option-variable store.
pub fn option_vars() -> &'static OptionVars {
    Env::global().option_vars()
}
