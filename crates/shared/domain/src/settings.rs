//! Project settings values and declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Bool,
    Float,
}

/// Editor visibility tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Basic,
    #[default]
    Advanced,
}

/// Editor hint attached to a setting's property info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyHint {
    #[default]
    None,
}

/// A stored setting value.
///
/// Only `Bool` and `Float` are ever declared, but stores accept whatever a project file or
/// an override supplies, so readers must check the variant instead of assuming it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl SettingValue {
    /// Short type label for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    /// Strict boolean read: only `Bool` yields a value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric read: `Float` and `Int` both yield a value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Whether the value can be read as the given declared kind.
    #[must_use]
    pub const fn matches(&self, kind: SettingKind) -> bool {
        match kind {
            SettingKind::Bool => self.as_bool().is_some(),
            SettingKind::Float => self.as_float().is_some(),
        }
    }

    /// Parses command-line style text: `true`/`false`, then a number, then a plain string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            return Self::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return Self::Bool(false);
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::Float(value);
        }
        Self::String(trimmed.to_owned())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Property metadata the editor uses to render a setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,
    pub kind: SettingKind,
    pub hint: PropertyHint,
}

/// A compiled-in setting declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDecl {
    pub path: &'static str,
    pub kind: SettingKind,
    pub default: SettingValue,
    pub tier: Visibility,
    pub hint: PropertyHint,
}

impl SettingDecl {
    /// An advanced boolean setting, the shape of every extension flag.
    #[must_use]
    pub const fn flag(path: &'static str, default: bool) -> Self {
        Self {
            path,
            kind: SettingKind::Bool,
            default: SettingValue::Bool(default),
            tier: Visibility::Advanced,
            hint: PropertyHint::None,
        }
    }

    /// An advanced numeric setting.
    #[must_use]
    pub const fn float(path: &'static str, default: f64) -> Self {
        Self {
            path,
            kind: SettingKind::Float,
            default: SettingValue::Float(default),
            tier: Visibility::Advanced,
            hint: PropertyHint::None,
        }
    }

    #[must_use]
    pub const fn basic(mut self) -> Self {
        self.tier = Visibility::Basic;
        self
    }

    #[must_use]
    pub fn property_info(&self) -> PropertyInfo {
        PropertyInfo { name: self.path.to_owned(), kind: self.kind, hint: self.hint }
    }
}
