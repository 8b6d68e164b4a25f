//! Platform directories for config and log files.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{MtError, MtResult};

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Application data directory (logs live under `logs/`).
    ///
    /// - Windows: `%APPDATA%/MTDataAPI`
    /// - macOS: `~/Library/Application Support/MTDataAPI`
    /// - Linux: `~/.local/share/MTDataAPI`
    pub fn data_dir() -> MtResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| MtError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Application configuration directory (`config.toml` lives here).
    pub fn config_dir() -> MtResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| MtError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Default log directory.
    pub fn log_dir() -> MtResult<PathBuf> {
        Ok(Self::data_dir()?.join("logs"))
    }

    /// Human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name() {
        assert_eq!(Platform::Windows.name(), "Windows");
        assert_eq!(Platform::MacOs.to_string(), "macOS");
        assert_eq!(Platform::Linux.name(), "Linux");
    }

    #[test]
    fn test_log_dir_is_under_data_dir() {
        if let (Ok(data), Ok(logs)) = (Platform::data_dir(), Platform::log_dir()) {
            assert!(logs.starts_with(&data));
            assert!(data.ends_with(APP_NAME));
        }
    }
}
