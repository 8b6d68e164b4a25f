//! Application configuration management.
//!
//! Configuration is read from TOML on disk. It covers the Data API endpoint
//! (base URL, endpoint version, client id, basic auth), transport settings,
//! the account used by the example application, and logging.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{MtError, MtResult};
use crate::platform::Platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data API endpoint settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Account used by the example application.
    #[serde(default)]
    pub account: AccountConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Data API script URL, e.g. "https://example.com/cgi-bin/mt/mt-data-api.cgi".
    #[serde(default)]
    pub base_url: String,

    /// Endpoint version path segment ("v2", "v3", ...).
    #[serde(default = "default_endpoint_version")]
    pub endpoint_version: String,

    /// Client identifier sent with `/authentication`.
    #[serde(default = "default_client_id")]
    pub client_id: String,

    /// HTTP basic auth user name in front of the CGI, if any.
    #[serde(default)]
    pub basic_auth_username: String,

    /// HTTP basic auth password in front of the CGI, if any.
    #[serde(default)]
    pub basic_auth_password: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,

    /// Whether to accept self-signed TLS certificates.
    #[serde(default)]
    pub accept_self_signed_certs: bool,

    /// Maximum number of continuation phases followed for one publish job.
    #[serde(default = "default_max_publish_phases")]
    pub max_publish_phases: u32,

    /// Encoding label used to decode `exportEntries` output.
    #[serde(default = "default_entries_encoding")]
    pub export_entries_encoding: String,

    /// Encoding label used to decode `exportLogs` output.
    #[serde(default = "default_logs_encoding")]
    pub export_logs_encoding: String,
}

/// Sign-in settings for the example application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Movable Type user name.
    #[serde(default)]
    pub username: String,

    /// Movable Type password. Prompted for when empty.
    #[serde(default)]
    pub password: String,

    /// Ask the server for a long-lived session.
    #[serde(default = "default_true")]
    pub remember: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output in the log file.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_endpoint_version() -> String {
    constants::DEFAULT_ENDPOINT_VERSION.to_string()
}

fn default_client_id() -> String {
    constants::DEFAULT_CLIENT_ID.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_max_publish_phases() -> u32 {
    constants::DEFAULT_MAX_PUBLISH_PHASES
}

fn default_entries_encoding() -> String {
    constants::export_encoding::ENTRIES.to_string()
}

fn default_logs_encoding() -> String {
    constants::export_encoding::LOGS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            endpoint_version: default_endpoint_version(),
            client_id: default_client_id(),
            basic_auth_username: String::new(),
            basic_auth_password: String::new(),
            api_timeout_ms: default_api_timeout(),
            accept_self_signed_certs: false,
            max_publish_phases: default_max_publish_phases(),
            export_entries_encoding: default_entries_encoding(),
            export_logs_encoding: default_logs_encoding(),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            remember: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ServerConfig {
    /// Server config pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: AppConfig::sanitize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Whether basic auth credentials are complete.
    pub fn has_basic_auth(&self) -> bool {
        !self.basic_auth_username.is_empty() && !self.basic_auth_password.is_empty()
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, or defaults.
    pub fn load_default() -> MtResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> MtResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&contents)?;
        config.server.base_url = Self::sanitize_base_url(&config.server.base_url);
        Ok(config)
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> MtResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> MtResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Platform::log_dir()
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Fail unless a base URL is configured.
    pub fn require_base_url(&self) -> MtResult<&str> {
        if self.server.base_url.is_empty() {
            Err(MtError::MissingConfig("server.base_url".into()))
        } else {
            Ok(&self.server.base_url)
        }
    }

    /// Normalize a Data API base URL.
    ///
    /// Trims whitespace and quotes, adds `http://` when no scheme is given,
    /// and strips trailing slashes so paths can be appended with `/`.
    pub fn sanitize_base_url(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.endpoint_version, "v2");
        assert_eq!(config.server.client_id, "MTDataAPIClient");
        assert_eq!(config.server.api_timeout_ms, 30_000);
        assert_eq!(config.server.max_publish_phases, 100);
        assert_eq!(config.logging.level, "info");
        assert!(config.account.remember);
        assert!(!config.server.has_basic_auth());
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            AppConfig::sanitize_base_url("example.com/cgi-bin/mt/mt-data-api.cgi/"),
            "http://example.com/cgi-bin/mt/mt-data-api.cgi"
        );
        assert_eq!(
            AppConfig::sanitize_base_url("  \"https://example.com/mt-data-api.cgi\"  "),
            "https://example.com/mt-data-api.cgi"
        );
        assert_eq!(AppConfig::sanitize_base_url("   "), "");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            base_url = "http://localhost/mt-data-api.cgi"
            endpoint_version = "v3"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.endpoint_version, "v3");
        assert_eq!(config.server.client_id, "MTDataAPIClient");
        assert_eq!(config.server.export_logs_encoding, "shift_jis");
    }

    #[test]
    fn test_require_base_url() {
        let mut config = AppConfig::default();
        assert!(matches!(config.require_base_url(), Err(MtError::MissingConfig(_))));
        config.server.base_url = "http://localhost".into();
        assert_eq!(config.require_base_url().unwrap(), "http://localhost");
    }
}
