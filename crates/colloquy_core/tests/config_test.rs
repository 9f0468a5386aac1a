//! Tests for client configuration loading and validation.

use colloquy_core::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use colloquy_error::ConfigErrorKind;
use std::time::Duration;

#[test]
fn parses_full_config() {
    let json = r#"{
        "api_key": "sk-test",
        "api_url": "https://api.example.com/v1",
        "model": "gpt-4o",
        "temperature": 0.5,
        "max_tokens": 2000,
        "request_timeout_secs": 30
    }"#;

    let config = ClientConfig::from_json_str(json).expect("Valid JSON");

    assert_eq!(config.api_key(), "sk-test");
    assert_eq!(config.base_url(), "https://api.example.com/v1");
    assert_eq!(config.model(), "gpt-4o");
    assert_eq!(*config.temperature(), 0.5);
    assert_eq!(*config.max_tokens(), 2000);
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn optional_fields_fall_back_to_defaults() {
    let json = r#"{
        "api_key": "sk-test",
        "model": "gpt-4o",
        "temperature": 0.7,
        "max_tokens": 1000
    }"#;

    let config = ClientConfig::from_json_str(json).expect("Valid JSON");

    assert!(config.api_url().is_none());
    assert_eq!(config.base_url(), DEFAULT_API_URL);
    assert_eq!(
        config.request_timeout(),
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
}

#[test]
fn missing_required_field_is_invalid() {
    // model is absent
    let json = r#"{"api_key": "sk-test", "temperature": 0.7, "max_tokens": 1000}"#;

    let err = ClientConfig::from_json_str(json).expect_err("Missing field");
    assert_eq!(err.kind, ConfigErrorKind::Invalid);
    assert!(err.message.contains("model"));
}

#[test]
fn mistyped_field_is_invalid() {
    let json = r#"{
        "api_key": "sk-test",
        "model": "gpt-4o",
        "temperature": "warm",
        "max_tokens": 1000
    }"#;

    let err = ClientConfig::from_json_str(json).expect_err("Wrong type");
    assert_eq!(err.kind, ConfigErrorKind::Invalid);
}

#[test]
fn non_json_content_is_invalid() {
    let err = ClientConfig::from_json_str("api_key = sk-test").expect_err("Not JSON");
    assert_eq!(err.kind, ConfigErrorKind::Invalid);
}

#[test]
fn missing_file_is_not_found() {
    let err = ClientConfig::from_file("/nonexistent/config.json").expect_err("No file");
    assert_eq!(err.kind, ConfigErrorKind::NotFound);
    assert!(err.message.contains("does not exist"));
}

#[test]
fn file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"api_key": "sk-test", "model": "gpt-4o", "temperature": 0.7, "max_tokens": 1000}"#,
    )?;

    let config = ClientConfig::from_file(&path)?;
    assert_eq!(config.model(), "gpt-4o");
    Ok(())
}

#[test]
fn require_api_url_distinguishes_presence() {
    let with_url = r#"{
        "api_key": "sk-test",
        "api_url": "https://api.example.com/v1",
        "model": "gpt-4o",
        "temperature": 0.7,
        "max_tokens": 1000
    }"#;
    let config = ClientConfig::from_json_str(with_url).expect("Valid JSON");
    assert_eq!(
        config.require_api_url().expect("api_url present"),
        "https://api.example.com/v1"
    );

    let without_url = r#"{
        "api_key": "sk-test",
        "model": "gpt-4o",
        "temperature": 0.7,
        "max_tokens": 1000
    }"#;
    let config = ClientConfig::from_json_str(without_url).expect("Valid JSON");
    let err = config.require_api_url().expect_err("api_url absent");
    assert_eq!(err.kind, ConfigErrorKind::Invalid);
    assert!(err.message.contains("api_url"));
}
