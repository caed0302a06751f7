use crate::phase::Phase;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the host simulator.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfigInner {
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
    pub host: HostModeConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct HostConfig {
    #[serde(flatten, default)]
    inner: Arc<HostConfigInner>,
}

impl Deref for HostConfig {
    type Target = HostConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HostConfig {
    fn deref_mut(&mut self) -> &mut HostConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where project settings come from and go to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Persisted project settings file (toml or json). Missing means a fresh store.
    pub settings: Option<PathBuf>,
    /// Read `XRV_SETTING__*` environment overrides.
    pub env_overrides: bool,
    /// Write changed settings back after the run.
    pub save_to: Option<PathBuf>,
}

/// Logger output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<PathBuf>,
}

/// How the simulated host drives the extension.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostModeConfig {
    /// Authoring environment (runs the Editor phase) or deployed build.
    pub editor: bool,
    /// Stop driving phases after this one, emulating a host abort.
    pub stop_after: Phase,
    /// Tear everything down before exiting.
    pub shutdown: bool,
}

// --- Default ---

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { settings: None, env_overrides: true, save_to: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None }
    }
}

impl Default for HostModeConfig {
    fn default() -> Self {
        Self { editor: true, stop_after: Phase::Max, shutdown: true }
    }
}
