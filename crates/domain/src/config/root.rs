use serde::{Deserialize, Serialize};

use super::blocking::BlockingConfig;
use super::cloud::CloudConfig;
use super::errors::ConfigError;
use super::fetch::FetchConfig;
use super::logging::LoggingConfig;
use super::storage::StorageConfig;
use super::update::UpdateConfig;

/// Main configuration structure for Focusgate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Settings persistence
    pub storage: StorageConfig,

    /// Blocklist source fetching (timeouts, retries, caching)
    pub fetch: FetchConfig,

    /// Update orchestration (concurrency, staleness interval)
    pub update: UpdateConfig,

    /// Blocked-page redirect
    pub blocking: BlockingConfig,

    /// Optional cloud sync backend
    pub cloud: CloudConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. focusgate.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("focusgate.toml").exists() {
            Self::from_file("focusgate.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.storage_path {
            self.storage.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }
}

/// Command-line overrides applied after the file is loaded.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub storage_path: Option<String>,
    pub log_level: Option<String>,
}
