//! # Logger
//!
//! Tracing subscriber setup for the host simulator.
//!
//! Console output goes to **stderr**, so phase reports printed on stdout stay machine-readable.
//! An optional rolling file appender writes through a non-blocking worker. Both outputs can be
//! switched to JSON lines. `RUST_LOG` still overrides the configured level.
//!
//! The extension crates never install a subscriber themselves; only the binary does.
//!
//! ## Example
//!
//! ```rust
//! use xrv_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder()
//!     .name("xrv-host")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// A handle to the initialized logging system.
///
/// Holds the file worker guard, if any. Keep it alive until the host exits.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`].
    ///
    /// The name prefixes rolling log files (e.g., `xrv-host.2026-10-16.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub const fn has_file_output(&self) -> bool {
        self.guard.is_some()
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`), case-insensitively.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for anything else.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|_| LoggerError::InvalidConfiguration {
        message: format!("Unknown log level '{level}'").into(),
        context: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse() -> Result<(), LoggerError> {
        assert_eq!(parse_level("debug")?, LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ")?, LevelFilter::WARN);
        assert_eq!(parse_level("off")?, LevelFilter::OFF);
        Ok(())
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_level("chatty").expect_err("not a level");
        assert_eq!(err.kind(), "InvalidConfiguration");
        assert!(err.to_string().contains("chatty"));
    }
}
