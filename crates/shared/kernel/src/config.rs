use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Environment prefix for host configuration (`XRV__HOST__EDITOR=false`).
pub const ENV_PREFIX: &str = "XRV";

#[xrv_derive::xrv_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads layered configuration: an optional file, then `XRV__` environment variables.
///
/// Nested keys use double underscores, so `XRV__LOGGING__LEVEL=debug` maps to `logging.level`.
/// Without a path only the environment and the serde defaults of `T` apply.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the given file is missing or unreadable, or if the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use xrv_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// #[serde(default)]
/// struct HostSection {
///     editor: bool,
/// }
///
/// let cfg: HostSection = load_config(None::<&str>).unwrap_or_default();
/// # let _ = cfg.editor;
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    let path: Option<&Path> = path.as_ref().map(AsRef::as_ref);

    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        },
        None => info!("No config file given, using defaults and environment"),
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
