use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use xrv_kernel::context::{PhaseReport, Status, TeardownReport};

/// What a full simulated run did, in host order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub phases: Vec<PhaseReport>,
    /// Singletons visible once initialization finished.
    pub published: Vec<&'static str>,
    pub wrappers: Vec<&'static str>,
    pub plugins: Vec<&'static str>,
    pub saved: Option<PathBuf>,
    pub teardown: Vec<TeardownReport>,
    /// Singletons still visible at exit. Empty after a shutdown.
    pub remaining: Vec<&'static str>,
}

impl RunSummary {
    /// Whether any phase skipped a step because a collaborator was missing.
    #[must_use]
    pub fn degraded(&self) -> bool {
        self.phases.iter().any(|phase| !phase.degraded.is_empty())
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phase in &self.phases {
            write!(f, "{:<8} {}", phase.phase, phase.status)?;
            if phase.status == Status::Applied {
                write!(
                    f,
                    ": {} settings, {} classes, {} wrappers, {} published, {} plugins",
                    phase.settings.len(),
                    phase.registered.len(),
                    phase.wrappers.len(),
                    phase.published.len(),
                    phase.plugins.len()
                )?;
            }
            writeln!(f)?;
            for outcome in phase.skipped() {
                writeln!(f, "  hidden {} ({})", outcome.flag, outcome.decision)?;
            }
            for reason in &phase.degraded {
                writeln!(f, "  degraded: {reason}")?;
            }
        }

        writeln!(f, "published ({}):", self.published.len())?;
        for name in &self.published {
            writeln!(f, "  {name}")?;
        }
        if !self.plugins.is_empty() {
            writeln!(f, "plugins: {}", self.plugins.join(", "))?;
        }
        if let Some(path) = &self.saved {
            writeln!(f, "saved settings to {}", path.display())?;
        }

        for teardown in &self.teardown {
            writeln!(
                f,
                "{:<8} terminated: {} unpublished, {} classes, {} wrappers, {} plugins, {} released",
                teardown.phase,
                teardown.unpublished.len(),
                teardown.unregistered.len(),
                teardown.wrappers.len(),
                teardown.plugins.len(),
                teardown.released
            )?;
        }
        Ok(())
    }
}
