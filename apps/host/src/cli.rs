use clap::Parser;
use std::path::PathBuf;
use xrv_domain::config::HostConfig;
use xrv_domain::phase::Phase;

/// Command-line flags. Every flag that is set wins over the config file and `XRV__*` variables.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "xrv-host", version, about = "Drive the XR vendor extension through the host lifecycle")]
pub struct Cli {
    /// Host configuration file (toml, json, yaml).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project settings file to load before the first phase.
    #[arg(short, long, value_name = "FILE")]
    pub project: Option<PathBuf>,

    /// Override a setting for this run, e.g. `xr/openxr/extensions/fb_scene=false`.
    #[arg(short, long = "set", value_name = "PATH=VALUE")]
    pub set: Vec<String>,

    /// Simulate a deployed build (no editor phase work, no editor plugins).
    #[arg(long)]
    pub deployed: bool,

    /// Stop after this phase, emulating a host that aborts initialization.
    #[arg(long, value_name = "PHASE", value_parser = parse_phase)]
    pub until: Option<Phase>,

    /// Write changed project settings to this file after the run.
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Leave everything registered instead of tearing down at exit.
    #[arg(long)]
    pub no_shutdown: bool,

    /// Ignore `XRV_SETTING__*` environment overrides.
    #[arg(long)]
    pub no_env: bool,

    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Folds the flags into a loaded configuration.
    pub fn apply(&self, config: &mut HostConfig) {
        if let Some(path) = &self.project {
            config.project.settings = Some(path.clone());
        }
        if let Some(path) = &self.save {
            config.project.save_to = Some(path.clone());
        }
        if self.no_env {
            config.project.env_overrides = false;
        }
        if self.deployed {
            config.host.editor = false;
        }
        if let Some(phase) = self.until {
            config.host.stop_after = phase;
        }
        if self.no_shutdown {
            config.host.shutdown = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

fn parse_phase(raw: &str) -> Result<Phase, String> {
    Phase::parse(raw).ok_or_else(|| {
        let known: Vec<_> = Phase::ALL.iter().map(|phase| phase.as_str()).collect();
        format!("unknown phase '{raw}', expected one of: {}", known.join(", "))
    })
}
