use std::io::Write;
use tempfile::NamedTempFile;
use xrv_kernel::config::load_config;
use xrv_kernel::domain::config::HostConfig;
use xrv_kernel::domain::phase::Phase;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn file_values_fill_sections() {
    let file = config_file(
        r#"
        [host]
        editor = false
        stop_after = "scene"

        [logging]
        level = "debug"
        "#,
    );

    let config: HostConfig = load_config(Some(file.path())).expect("config loads");

    assert!(!config.host.editor);
    assert_eq!(config.host.stop_after, Phase::Scene);
    assert!(config.host.shutdown);
    assert_eq!(config.logging.level, "debug");
    assert!(config.project.env_overrides);
}

#[test]
fn no_file_yields_defaults() {
    let config: HostConfig = load_config(None::<&str>).expect("defaults");

    assert!(config.host.editor);
    assert_eq!(config.host.stop_after, Phase::Max);
    assert!(config.project.settings.is_none());
}

#[test]
fn missing_file_is_an_error() {
    let err = load_config::<HostConfig>(Some("/nonexistent/xrv/host.toml")).expect_err("missing");

    assert_eq!(err.kind(), "Config");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn mistyped_value_is_an_error() {
    let file = config_file("[host]\nstop_after = \"sometime\"\n");

    let err = load_config::<HostConfig>(Some(file.path())).expect_err("bad phase");
    assert!(err.to_string().contains("Failed to deserialize config"));
}
