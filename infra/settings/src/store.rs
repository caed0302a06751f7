use std::fmt::Debug;
use xrv_domain::settings::{PropertyInfo, SettingValue};

/// A stored setting with its editor metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingEntry {
    pub value: SettingValue,
    /// Canonical default shown by the editor; `None` until a declaration sets it.
    pub initial_value: Option<SettingValue>,
    pub basic: bool,
    pub property_info: Option<PropertyInfo>,
}

impl SettingEntry {
    #[must_use]
    pub const fn new(value: SettingValue) -> Self {
        Self { value, initial_value: None, basic: false, property_info: None }
    }

    /// `true` when the stored value differs from the declared default, or no default was declared.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.initial_value.as_ref() != Some(&self.value)
    }
}

/// Path-keyed settings storage as the host exposes it.
///
/// Metadata setters are no-ops for paths that have no stored value.
pub trait SettingsStore: Debug {
    fn has_setting(&self, path: &str) -> bool;

    /// Stored project value, ignoring overrides.
    fn setting(&self, path: &str) -> Option<SettingValue>;

    /// Resolves an external override first, then the stored project value.
    fn setting_with_override(&self, path: &str) -> Option<SettingValue>;

    fn set_setting(&mut self, path: &str, value: SettingValue);

    fn set_initial_value(&mut self, path: &str, value: SettingValue);

    fn set_as_basic(&mut self, path: &str, basic: bool);

    fn add_property_info(&mut self, info: PropertyInfo);

    fn entry(&self, path: &str) -> Option<&SettingEntry>;
}
