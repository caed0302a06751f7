use crate::settings::Settings;
use serde::Serialize;
use tracing::warn;
use xrv_domain::settings::SettingValue;

/// Why a flag did or did not enable its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "snake_case", tag = "decision", content = "found")]
#[strum(serialize_all = "snake_case")]
pub enum GateDecision {
    Enabled,
    Disabled,
    /// The flag was never stored nor overridden.
    Unset,
    /// No settings store was reachable.
    Unavailable,
    /// The flag holds a non-boolean value of the given type.
    Malformed(&'static str),
}

impl GateDecision {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Decides, per flag, whether a group of modules is exposed this run.
///
/// Reads are strict: only a stored boolean can enable a group. Anything else resolves to
/// "not enabled" and is reported through [`GateDecision`].
#[derive(Debug, Clone, Copy)]
pub struct ActivationGate<'s, 'a> {
    settings: &'s Settings<'a>,
}

impl<'s, 'a> ActivationGate<'s, 'a> {
    #[must_use]
    pub const fn new(settings: &'s Settings<'a>) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn evaluate(&self, flag: &str) -> GateDecision {
        if !self.settings.is_available() {
            return GateDecision::Unavailable;
        }

        match self.settings.get_with_override(flag) {
            None => GateDecision::Unset,
            Some(SettingValue::Bool(true)) => GateDecision::Enabled,
            Some(SettingValue::Bool(false)) => GateDecision::Disabled,
            Some(other) => {
                warn!(flag, found = other.type_name(), value = %other, "Flag is not a boolean, treating as disabled");
                GateDecision::Malformed(other.type_name())
            },
        }
    }

    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.evaluate(flag).is_enabled()
    }
}
