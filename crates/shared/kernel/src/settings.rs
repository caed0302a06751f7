//! Read and define access to the host's project settings.

use serde::Serialize;
use tracing::trace;
use xrv_domain::settings::{SettingDecl, SettingValue, Visibility};
use xrv_settings::SettingsStore;

/// Outcome of [`Settings::define`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Definition {
    /// The path was absent and now holds the default.
    Created,
    /// The stored value was left untouched; only metadata was refreshed.
    Kept,
    /// No store was reachable.
    Unavailable,
}

/// Facade over an optional settings store.
///
/// Every operation degrades instead of failing when the host has no store: lookups report
/// nothing and definitions return [`Definition::Unavailable`].
#[derive(Debug)]
pub struct Settings<'a> {
    store: Option<&'a mut dyn SettingsStore>,
}

impl<'a> Settings<'a> {
    #[must_use]
    pub fn new(store: Option<&'a mut dyn SettingsStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.store.is_some()
    }

    #[must_use]
    pub fn has(&self, path: &str) -> bool {
        self.store.as_deref().is_some_and(|store| store.has_setting(path))
    }

    /// Declares a setting.
    ///
    /// An absent path receives the default. An existing value is never overwritten, but the
    /// initial value, visibility tier and property info are re-applied on every call, so
    /// defining twice is harmless.
    pub fn define(&mut self, decl: &SettingDecl) -> Definition {
        let Some(store) = self.store.as_deref_mut() else {
            trace!(path = decl.path, "Settings store unavailable, skipping definition");
            return Definition::Unavailable;
        };

        let created = !store.has_setting(decl.path);
        if created {
            store.set_setting(decl.path, decl.default.clone());
        }
        store.set_initial_value(decl.path, decl.default.clone());
        store.set_as_basic(decl.path, decl.tier == Visibility::Basic);
        store.add_property_info(decl.property_info());

        trace!(path = decl.path, created, "Defined setting");
        if created { Definition::Created } else { Definition::Kept }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<SettingValue> {
        self.store.as_deref()?.setting(path)
    }

    /// Like [`Settings::get`], but override layers win over the stored value.
    #[must_use]
    pub fn get_with_override(&self, path: &str) -> Option<SettingValue> {
        self.store.as_deref()?.setting_with_override(path)
    }
}
