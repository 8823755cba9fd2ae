use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::types::Config;

/// Environment variable overriding `client.base_url`.
pub const BASE_URL_ENV: &str = "WORKSEARCH_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/worksearch/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("worksearch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `WORKSEARCH_BASE_URL` when it is set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.client.base_url = base_url;
            }
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL parses and uses http or https
    /// - The search path is absolute and the query parameter is named
    /// - Timeouts are non-zero
    /// - Every region id is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let client = &self.client;

        let base = Url::parse(&client.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", client.base_url, e),
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "base_url '{}' must use http or https",
                    client.base_url
                ),
            });
        }

        if !client.search_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("search_path '{}' must start with '/'", client.search_path),
            });
        }

        if client.query_param.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "query_param must not be empty".to_string(),
            });
        }

        if client.timeout_seconds == 0 || client.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        let regions = &self.regions;
        let ids = [
            ("form", &regions.form),
            ("query_field", &regions.query_field),
            ("table", &regions.table),
            ("table_body", &regions.table_body),
            ("count_value", &regions.count_value),
        ];
        if let Some((name, _)) = ids.iter().find(|(_, id)| id.is_empty()) {
            return Err(ConfigError::ValidationError {
                message: format!("Region '{}' must have a non-empty id", name),
            });
        }

        Ok(())
    }
}
