//! Integration tests for application configuration.
//!
//! Tests config loading from TOML files, default values, base URL
//! sanitization on load, and platform directories.

mod common;

use mt_core::config::AppConfig;
use mt_core::platform::Platform;
use mt_core::MtError;

// ---- Default values ----

#[test]
fn default_config_has_expected_server_defaults() {
    let config = AppConfig::default();
    assert!(config.server.base_url.is_empty(), "default base url should be empty");
    assert_eq!(config.server.endpoint_version, "v2");
    assert_eq!(config.server.client_id, "MTDataAPIClient");
    assert!(config.server.basic_auth_username.is_empty());
    assert!(config.server.basic_auth_password.is_empty());
    assert_eq!(config.server.api_timeout_ms, 30_000);
    assert!(!config.server.accept_self_signed_certs);
    assert_eq!(config.server.max_publish_phases, 100);
}

#[test]
fn default_config_has_expected_export_encodings() {
    let config = AppConfig::default();
    assert_eq!(config.server.export_entries_encoding, "utf-8");
    assert_eq!(config.server.export_logs_encoding, "shift_jis");
}

#[test]
fn default_config_has_expected_account_and_logging_defaults() {
    let config = AppConfig::default();
    assert!(config.account.username.is_empty());
    assert!(config.account.remember);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.directory.is_empty());
    assert!(!config.logging.json_output);
}

// ---- Loading from disk ----

#[test]
fn load_full_config_from_file() {
    let (dir, path) = common::write_config(
        r#"
        [server]
        base_url = "https://blog.example.com/cgi-bin/mt/mt-data-api.cgi/"
        endpoint_version = "v4"
        client_id = "release-bot"
        basic_auth_username = "staging"
        basic_auth_password = "letmein"
        api_timeout_ms = 5000
        accept_self_signed_certs = true
        max_publish_phases = 12
        export_logs_encoding = "utf-8"

        [account]
        username = "melody"
        remember = false

        [logging]
        level = "debug"
        directory = "/tmp/mt-logs"
        json_output = true
        "#,
    );

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(
        config.server.base_url,
        "https://blog.example.com/cgi-bin/mt/mt-data-api.cgi",
        "trailing slash should be stripped on load"
    );
    assert_eq!(config.server.endpoint_version, "v4");
    assert_eq!(config.server.client_id, "release-bot");
    assert!(config.server.has_basic_auth());
    assert_eq!(config.server.api_timeout_ms, 5000);
    assert!(config.server.accept_self_signed_certs);
    assert_eq!(config.server.max_publish_phases, 12);
    assert_eq!(config.server.export_entries_encoding, "utf-8");
    assert_eq!(config.server.export_logs_encoding, "utf-8");
    assert_eq!(config.account.username, "melody");
    assert!(!config.account.remember);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_output);
    assert_eq!(
        config.effective_log_dir().unwrap(),
        std::path::PathBuf::from("/tmp/mt-logs")
    );
    drop(dir);
}

#[test]
fn load_empty_file_gives_defaults() {
    let (_dir, path) = common::write_config("");
    let config = AppConfig::load_from_file(&path).unwrap();
    assert!(config.server.base_url.is_empty());
    assert_eq!(config.server.endpoint_version, "v2");
    assert!(config.account.remember);
}

#[test]
fn load_adds_scheme_to_bare_host() {
    let (_dir, path) = common::write_config(
        r#"
        [server]
        base_url = "localhost:8080/mt/mt-data-api.cgi"
        "#,
    );
    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.server.base_url, "http://localhost:8080/mt/mt-data-api.cgi");
}

#[test]
fn load_invalid_toml_is_config_error() {
    let (_dir, path) = common::write_config("[server\nbase_url = ");
    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, MtError::Config(_)));
}

#[test]
fn load_wrong_type_is_config_error() {
    let (_dir, path) = common::write_config(
        r#"
        [server]
        api_timeout_ms = "soon"
        "#,
    );
    assert!(matches!(
        AppConfig::load_from_file(&path),
        Err(MtError::Config(_))
    ));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = AppConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MtError::Io(_)));
}

#[test]
fn require_base_url_reports_missing_key() {
    let config = AppConfig::default();
    match config.require_base_url() {
        Err(MtError::MissingConfig(key)) => assert_eq!(key, "server.base_url"),
        other => panic!("expected MissingConfig, got {other:?}"),
    }
}

// ---- Platform ----
// Home-relative directories may be unavailable in sandboxed CI; only check
// their shape when the platform can resolve them.

#[test]
fn default_config_path_is_config_toml() {
    if let Ok(path) = AppConfig::default_config_path() {
        assert_eq!(path.file_name().unwrap(), "config.toml");
        assert!(path.starts_with(Platform::config_dir().unwrap()));
    }
}

#[test]
fn effective_log_dir_falls_back_to_platform_dir() {
    let config = AppConfig::default();
    if let (Ok(effective), Ok(platform)) = (config.effective_log_dir(), Platform::log_dir()) {
        assert_eq!(effective, platform);
    }
}
