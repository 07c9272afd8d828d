use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_without_file_or_env() {
    let loaded = settings_from_sources(None, no_env);
    assert!(loaded.warnings.is_empty());
    let settings = loaded.settings;
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.server_bind, "127.0.0.1:8050");
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
bind_addr = "0.0.0.0:9000"
log_filter = "server=debug"
max_input_bytes = "1024"
"#;
    let loaded = settings_from_sources(Some(raw), no_env);
    assert!(loaded.warnings.is_empty());
    let settings = loaded.settings;
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.log_filter, "server=debug");
    assert_eq!(settings.max_input_bytes, 1024);
}

#[test]
fn app_prefixed_env_wins_over_plain_env_and_file() {
    let raw = r#"bind_addr = "0.0.0.0:9000""#;
    let settings = settings_from_sources(Some(raw), |key| match key {
        "SERVER_BIND" => Some("127.0.0.1:7000".into()),
        "APP__BIND_ADDR" => Some("127.0.0.1:7001".into()),
        "RUST_LOG" => Some("warn".into()),
        _ => None,
    })
    .settings;
    assert_eq!(settings.server_bind, "127.0.0.1:7001");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn invalid_values_fall_back_to_defaults_and_are_reported() {
    let loaded = settings_from_sources(Some("this is not toml ="), |key| match key {
        "APP__MAX_INPUT_BYTES" => Some("lots".into()),
        _ => None,
    });
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.warnings.len(), 2);
    assert!(loaded.warnings[0].starts_with("ignoring unreadable settings file"));
    assert_eq!(loaded.warnings[1], "ignoring invalid max_input_bytes 'lots'");

    let zero = settings_from_sources(Some(r#"max_input_bytes = "0""#), no_env);
    assert_eq!(zero.settings.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    assert_eq!(zero.warnings, vec!["ignoring invalid max_input_bytes '0'".to_string()]);
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("sentiment_gauge_missing_{suffix}.toml"));

    let settings = load_settings(&path).settings;
    assert_eq!(settings.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
}

#[test]
fn settings_file_on_disk_is_read() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("sentiment_gauge_settings_{suffix}.toml"));
    fs::write(&path, "max_input_bytes = \"2048\"\n").expect("write settings");

    let loaded = load_settings(&path);
    assert_eq!(loaded.settings.max_input_bytes, 2048);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_settings_file_on_disk_is_reported() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("sentiment_gauge_malformed_{suffix}.toml"));
    fs::write(&path, "bind_addr = [not a string\n").expect("write settings");

    let loaded = load_settings(&path);
    assert!(loaded
        .warnings
        .iter()
        .any(|w| w.starts_with("ignoring unreadable settings file")));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn bind_addr_parsing_reports_bad_input() {
    assert_eq!(
        parse_bind_addr(" 127.0.0.1:8050 ").expect("addr").port(),
        8050
    );
    let err = parse_bind_addr("localhost").expect_err("must fail");
    assert!(err.to_string().contains("invalid bind address"));
}
