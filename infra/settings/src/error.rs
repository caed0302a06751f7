use std::borrow::Cow;

/// A specialized [`SettingsError`] enum of this crate.
#[xrv_derive::xrv_error]
pub enum SettingsError {
    /// The `config` crate failed to read or merge a source.
    #[error("Settings source error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Settings I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Settings encoding error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A setting path is empty or has an illegal segment.
    #[error("Invalid setting path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An override is not of the form `path=value`.
    #[error("Invalid setting override{}: {message}", format_context(.context))]
    InvalidOverride { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
