//! # Host simulator
//!
//! Plays the engine's part: loads project settings, drives the extension through every
//! lifecycle phase against an in-memory [`LocalHost`], and reports what each phase changed.
//!
//! ## Example
//! ```rust
//! use xrv_domain::config::HostConfig;
//! use xrv_host::Simulator;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = HostConfig::default();
//! config.project.env_overrides = false;
//!
//! let summary = Simulator::builder().config(config).build()?.run()?;
//! assert!(summary.remaining.is_empty());
//! # Ok(())
//! # }
//! ```

mod cli;
mod report;

pub use crate::cli::Cli;
pub use crate::report::RunSummary;

use anyhow::{Context, Result};
use tracing::{info, warn};
use xrv::MINIMUM_PHASE;
use xrv_domain::config::HostConfig;
use xrv_domain::phase::Phase;
use xrv_kernel::host::local::LocalHost;
use xrv_settings::{Overrides, ProjectSettings};

/// A fluent builder for the [`Simulator`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct SimulatorBuilder {
    cfg: HostConfig,
    assignments: Vec<String>,
}

impl SimulatorBuilder {
    pub fn config(mut self, cfg: HostConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Adds `path=value` overrides. They win over environment overrides.
    pub fn assignments<I, S>(mut self, assignments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignments.extend(assignments.into_iter().map(Into::into));
        self
    }

    fn init_overrides(&self) -> Result<Overrides> {
        let mut overrides = if self.cfg.project.env_overrides {
            Overrides::from_env().context("Failed to read setting overrides from the environment")?
        } else {
            Overrides::default()
        };

        let mut explicit = Overrides::default();
        for raw in &self.assignments {
            explicit.parse_assignment(raw)?;
        }
        overrides.merge(explicit);
        Ok(overrides)
    }

    fn init_settings(&self, overrides: Overrides) -> Result<ProjectSettings> {
        let settings = match &self.cfg.project.settings {
            Some(path) => ProjectSettings::load(path)?,
            None => ProjectSettings::new(),
        };
        Ok(settings.with_overrides(overrides))
    }

    /// Resolves overrides and loads the project file.
    ///
    /// # Errors
    /// Fails on a malformed `path=value` assignment, an unreadable environment, or a missing
    /// or malformed project file.
    pub fn build(self) -> Result<Simulator> {
        let overrides = self.init_overrides()?;
        if !overrides.is_empty() {
            info!(count = overrides.len(), "Setting overrides active");
        }
        let settings = self.init_settings(overrides)?;

        let host = if self.cfg.host.editor {
            LocalHost::new(settings)
        } else {
            LocalHost::deployed(settings)
        };

        Ok(Simulator { cfg: self.cfg, host })
    }
}

/// One simulated extension load.
#[derive(Debug)]
pub struct Simulator {
    cfg: HostConfig,
    host: LocalHost,
}

impl Simulator {
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }

    #[must_use]
    pub const fn host(&self) -> &LocalHost {
        &self.host
    }

    /// Runs every phase up to the configured stop phase, then optionally saves settings and
    /// tears everything down.
    ///
    /// # Errors
    /// Fails if the compiled-in catalog is inconsistent or the settings file cannot be saved.
    pub fn run(mut self) -> Result<RunSummary> {
        let stop_after = self.cfg.host.stop_after;
        if stop_after < MINIMUM_PHASE {
            warn!(
                %stop_after,
                minimum = %MINIMUM_PHASE,
                "Host stops before the minimum initialization phase; no module will be published"
            );
        }

        let mut context = xrv::library_init().context("Critical: Extension catalog is invalid")?;

        let phases: Vec<_> = Phase::ALL
            .into_iter()
            .take_while(|phase| *phase <= stop_after)
            .map(|phase| context.on_phase(phase, &mut self.host))
            .collect();

        let published = self.host.published();
        let wrappers = self.host.wrappers();
        let plugins = self.host.plugins();
        info!(
            published = published.len(),
            wrappers = wrappers.len(),
            plugins = plugins.len(),
            "Host initialization finished"
        );

        let saved = match (&self.cfg.project.save_to, &self.host.settings) {
            (Some(path), Some(settings)) => {
                settings.save(path)?;
                Some(path.clone())
            },
            (Some(path), None) => {
                warn!(path = %path.display(), "No settings store to save");
                None
            },
            (None, _) => None,
        };

        let teardown =
            if self.cfg.host.shutdown { context.shutdown(&mut self.host) } else { Vec::new() };

        Ok(RunSummary {
            phases,
            published,
            wrappers,
            plugins,
            saved,
            teardown,
            remaining: self.host.published(),
        })
    }
}
