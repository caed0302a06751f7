use crate::error::{SettingsError, SettingsErrorExt};
use crate::path::join;
use config::{Config, Map, Source, Value, ValueKind};
use std::collections::BTreeMap;
use tracing::warn;
use xrv_domain::settings::SettingValue;

/// Builds `config` and flattens its nested tables into slash-separated setting paths.
///
/// Arrays and nulls have no setting representation and are skipped with a warning.
pub(crate) fn collect(config: &Config) -> Result<BTreeMap<String, SettingValue>, SettingsError> {
    let root = config.collect().context("Failed to collect settings source")?;
    let mut out = BTreeMap::new();
    flatten("", root, &mut out);
    Ok(out)
}

fn flatten(prefix: &str, table: Map<String, Value>, out: &mut BTreeMap<String, SettingValue>) {
    for (key, value) in table {
        let path = join(prefix, &key);
        match value.kind {
            ValueKind::Table(nested) => flatten(&path, nested, out),
            kind => match convert(kind) {
                Some(value) => {
                    out.insert(path, value);
                },
                None => warn!(path = %path, "Skipping setting without a scalar value"),
            },
        }
    }
}

fn convert(kind: ValueKind) -> Option<SettingValue> {
    match kind {
        ValueKind::Boolean(value) => Some(SettingValue::Bool(value)),
        ValueKind::I64(value) => Some(SettingValue::Int(value)),
        ValueKind::I128(value) => i64::try_from(value).ok().map(SettingValue::Int),
        ValueKind::U64(value) => i64::try_from(value).ok().map(SettingValue::Int),
        ValueKind::U128(value) => i64::try_from(value).ok().map(SettingValue::Int),
        ValueKind::Float(value) => Some(SettingValue::Float(value)),
        ValueKind::String(value) => Some(SettingValue::String(value)),
        ValueKind::Nil | ValueKind::Array(_) | ValueKind::Table(_) => None,
    }
}
