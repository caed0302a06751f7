use crate::error::SettingsError;

const SEPARATOR: char = '/';

/// Checks that `path` is a slash-separated list of non-empty `[A-Za-z0-9_-]` segments.
///
/// # Errors
/// Returns [`SettingsError::InvalidPath`] for empty paths, empty segments (leading,
/// trailing or doubled separators) and illegal characters.
pub fn validate_path(path: &str) -> Result<(), SettingsError> {
    if path.is_empty() {
        return Err(SettingsError::InvalidPath {
            message: "EMPTY".into(),
            context: Some("Setting path cannot be empty".into()),
        });
    }

    for segment in path.split(SEPARATOR) {
        if segment.is_empty() {
            return Err(SettingsError::InvalidPath {
                message: path.to_owned().into(),
                context: Some("Setting path contains an empty segment".into()),
            });
        }
        if !segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(SettingsError::InvalidPath {
                message: path.to_owned().into(),
                context: Some("Setting path contains illegal characters".into()),
            });
        }
    }

    Ok(())
}

/// Joins a parent path and a child key.
pub(crate) fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() { key.to_owned() } else { format!("{parent}{SEPARATOR}{key}") }
}
