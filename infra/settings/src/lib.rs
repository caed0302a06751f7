//! # Project Settings
//!
//! The persisted key/value configuration the host exposes to extensions.
//!
//! Settings are addressed by slash-separated paths such as
//! `xr/openxr/extensions/fb_passthrough`. Each entry keeps its stored value together with
//! the metadata the editor shows: the canonical initial value, the basic/advanced tier and
//! the property info (`{name, kind, hint}`).
//!
//! # Architectural Overview
//!
//! 1.  **[`SettingsStore`]**: The trait extensions talk to. Hosts may supply any implementation.
//! 2.  **[`ProjectSettings`]**: An ordered in-memory implementation with an override layer.
//! 3.  **[`Overrides`]**: Values taken from the environment or the command line that win over
//!     the stored project value in [`SettingsStore::setting_with_override`].
//!
//! # Examples
//!
//! ```rust
//! use xrv_settings::{Overrides, ProjectSettings, SettingsStore};
//! use xrv_domain::settings::SettingValue;
//!
//! # fn main() -> Result<(), xrv_settings::SettingsError> {
//! let mut overrides = Overrides::default();
//! overrides.parse_assignment("xr/openxr/extensions/fb_scene=false")?;
//!
//! let mut settings = ProjectSettings::new().with_overrides(overrides);
//! settings.set_setting("xr/openxr/extensions/fb_scene", SettingValue::Bool(true));
//!
//! assert_eq!(settings.setting("xr/openxr/extensions/fb_scene"), Some(SettingValue::Bool(true)));
//! assert_eq!(
//!     settings.setting_with_override("xr/openxr/extensions/fb_scene"),
//!     Some(SettingValue::Bool(false))
//! );
//! # Ok(())
//! # }
//! ```

mod error;
mod overrides;
mod path;
mod project;
mod source;
mod store;

pub use error::{SettingsError, SettingsErrorExt};
pub use overrides::{ENV_PREFIX, Overrides};
pub use path::validate_path;
pub use project::ProjectSettings;
pub use store::{SettingEntry, SettingsStore};
