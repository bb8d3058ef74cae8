// tests/config_loading.rs

use std::io::Write;

use exhausterr::config::{Settings, from_toml_str, load_from_path, load_or_default};
use exhausterr::errors::ExhausterrError;
use exhausterr::logging::resolve_level;
use exhausterr::types::{LogLevel, ReportStyle};
use tempfile::NamedTempFile;

#[test]
fn empty_settings_use_defaults() {
    let settings = from_toml_str("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.report.style, ReportStyle::Short);
    assert_eq!(settings.log_level, None);
}

#[test]
fn settings_file_is_read() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
log_level = "debug"

[report]
style = "structured"
"#
    )
    .unwrap();

    let settings = load_from_path(file.path()).unwrap();
    assert_eq!(settings.log_level, Some(LogLevel::Debug));
    assert_eq!(settings.report.style, ReportStyle::Structured);
}

#[test]
fn unknown_report_style_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[report]
style = "loud"
"#
    )
    .unwrap();

    match load_from_path(file.path()) {
        Err(ExhausterrError::ConfigError(msg)) => assert!(msg.contains("loud")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_keys_are_rejected() {
    match from_toml_str("colour = true") {
        Err(ExhausterrError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = load_or_default(dir.path().join("exhausterr.toml")).unwrap();
    assert_eq!(settings, Settings::default());

    match load_from_path(dir.path().join("exhausterr.toml")) {
        Err(ExhausterrError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}

#[test]
fn log_level_priority() {
    assert_eq!(
        resolve_level(Some(LogLevel::Trace), Some(LogLevel::Error), Some("warn".into())),
        tracing::Level::TRACE
    );
    assert_eq!(
        resolve_level(None, Some(LogLevel::Error), Some("warn".into())),
        tracing::Level::ERROR
    );
    assert_eq!(resolve_level(None, None, Some("WARNING".into())), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None, Some("nonsense".into())), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None, None), tracing::Level::INFO);
}
