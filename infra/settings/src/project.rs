use crate::error::{SettingsError, SettingsErrorExt};
use crate::overrides::Overrides;
use crate::source::collect;
use crate::store::{SettingEntry, SettingsStore};
use config::{Config, File};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};
use xrv_domain::settings::{PropertyInfo, SettingValue};

/// An ordered, in-memory project settings store.
///
/// # Characteristics
/// - **Deterministic**: entries are kept in path order, so saved files are stable.
/// - **Override layer**: [`Overrides`] are consulted by
///   [`SettingsStore::setting_with_override`] but never written into the entries.
/// - **Sparse persistence**: [`ProjectSettings::save`] only writes values that differ
///   from their declared initial value.
#[derive(Debug, Clone, Default)]
pub struct ProjectSettings {
    entries: BTreeMap<String, SettingEntry>,
    overrides: Overrides,
}

impl ProjectSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub const fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }

    #[must_use]
    pub const fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Loads a persisted project file. The format follows the file extension (`toml`, `json`, ...).
    ///
    /// Nested tables are flattened, so `[xr.openxr.extensions] fb_scene = false` and
    /// `"xr/openxr/extensions/fb_scene" = false` address the same setting.
    ///
    /// # Errors
    /// Returns [`SettingsError::Config`] if the file is missing or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let mut settings = Self::new();
        settings.merge_file(path)?;
        Ok(settings)
    }

    /// Merges the values of a project file into this store, replacing stored values.
    ///
    /// # Errors
    /// Returns [`SettingsError::Config`] if the file is missing or cannot be parsed.
    pub fn merge_file(&mut self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let config = Config::builder()
            .add_source(File::from(path).required(true))
            .build()
            .context(format!("Failed to read project settings: {}", path.display()))?;

        let values = collect(&config)?;
        info!(path = %path.display(), count = values.len(), "Loaded project settings");

        for (key, value) in values {
            self.set_setting(&key, value);
        }
        Ok(())
    }

    /// Writes every changed value as pretty JSON, keyed by full path.
    ///
    /// # Errors
    /// Returns [`SettingsError::Json`] if encoding fails and [`SettingsError::Io`] if the
    /// file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let changed: BTreeMap<&str, &SettingValue> = self.changed().collect();
        let encoded = serde_json::to_string_pretty(&changed).context("Failed to encode settings")?;

        fs::write(path, encoded)
            .context(format!("Failed to write project settings: {}", path.display()))?;
        info!(path = %path.display(), count = changed.len(), "Saved project settings");
        Ok(())
    }

    /// Entries whose value differs from the declared initial value.
    pub fn changed(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.is_changed())
            .map(|(path, entry)| (path.as_str(), &entry.value))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for ProjectSettings {
    fn has_setting(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    fn setting(&self, path: &str) -> Option<SettingValue> {
        self.entries.get(path).map(|entry| entry.value.clone())
    }

    fn setting_with_override(&self, path: &str) -> Option<SettingValue> {
        if let Some(value) = self.overrides.get(path) {
            trace!(path, value = %value, "Resolved setting from override");
            return Some(value.clone());
        }
        self.setting(path)
    }

    fn set_setting(&mut self, path: &str, value: SettingValue) {
        debug!(path, value = %value, "Storing setting");
        match self.entries.get_mut(path) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(path.to_owned(), SettingEntry::new(value));
            },
        }
    }

    fn set_initial_value(&mut self, path: &str, value: SettingValue) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.initial_value = Some(value);
        }
    }

    fn set_as_basic(&mut self, path: &str, basic: bool) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.basic = basic;
        }
    }

    fn add_property_info(&mut self, info: PropertyInfo) {
        if let Some(entry) = self.entries.get_mut(&info.name) {
            entry.property_info = Some(info);
        }
    }

    fn entry(&self, path: &str) -> Option<&SettingEntry> {
        self.entries.get(path)
    }
}
