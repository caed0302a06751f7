use crate::error::SettingsError;
use crate::path::validate_path;
use crate::source::collect;
use config::{Config, Environment};
use std::collections::BTreeMap;
use tracing::debug;
use xrv_domain::settings::SettingValue;

/// Environment prefix for setting overrides.
///
/// `XRV_SETTING__XR__OPENXR__EXTENSIONS__FB_PASSTHROUGH=false` overrides
/// `xr/openxr/extensions/fb_passthrough`.
pub const ENV_PREFIX: &str = "XRV_SETTING";

/// External values that take precedence over stored project settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: BTreeMap<String, SettingValue>,
}

impl Overrides {
    /// Reads overrides from the process environment.
    ///
    /// # Errors
    /// Returns [`SettingsError::Config`] if the environment cannot be collected.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_environment(environment())
    }

    /// Reads overrides from an explicit variable map instead of the process environment.
    ///
    /// # Errors
    /// Returns [`SettingsError::Config`] if the variables cannot be collected.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self::from_environment(environment().source(Some(map)))
    }

    fn from_environment(env: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder().add_source(env).build()?;
        let values = collect(&config)?;
        debug!(count = values.len(), "Collected setting overrides from environment");
        Ok(Self { values })
    }

    /// Parses a command-line style `path=value` assignment and records it.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidOverride`] when `=` is missing and
    /// [`SettingsError::InvalidPath`] when the path is malformed.
    pub fn parse_assignment(&mut self, raw: &str) -> Result<(), SettingsError> {
        let Some((path, value)) = raw.split_once('=') else {
            return Err(SettingsError::InvalidOverride {
                message: raw.to_owned().into(),
                context: Some("Expected `path=value`".into()),
            });
        };
        let path = path.trim();
        validate_path(path)?;
        self.set(path, SettingValue::parse(value));
        Ok(())
    }

    pub fn set(&mut self, path: impl Into<String>, value: SettingValue) {
        self.values.insert(path.into(), value);
    }

    /// Merges `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&SettingValue> {
        self.values.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.values.iter().map(|(path, value)| (path.as_str(), value))
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_parses_typed_values() -> Result<(), SettingsError> {
        let mut overrides = Overrides::default();
        overrides.parse_assignment("xr/openxr/extensions/fb_scene=false")?;
        overrides.parse_assignment(" xr/openxr/extensions/meta_scene_api/thickness = 0.25")?;

        assert_eq!(overrides.get("xr/openxr/extensions/fb_scene"), Some(&SettingValue::Bool(false)));
        assert_eq!(
            overrides.get("xr/openxr/extensions/meta_scene_api/thickness"),
            Some(&SettingValue::Float(0.25))
        );
        Ok(())
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        let err = Overrides::default().parse_assignment("xr/openxr").expect_err("no value");
        assert_eq!(err.kind(), "InvalidOverride");
    }

    #[test]
    fn assignment_with_bad_path_is_rejected() {
        let err = Overrides::default().parse_assignment("xr//openxr=true").expect_err("bad path");
        assert_eq!(err.kind(), "InvalidPath");
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let mut base = Overrides::default();
        base.set("a/b", SettingValue::Bool(true));
        base.set("a/c", SettingValue::Bool(true));

        let mut incoming = Overrides::default();
        incoming.set("a/b", SettingValue::Bool(false));

        base.merge(incoming);
        assert_eq!(base.get("a/b"), Some(&SettingValue::Bool(false)));
        assert_eq!(base.get("a/c"), Some(&SettingValue::Bool(true)));
        assert_eq!(base.len(), 2);
    }
}
