use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::types::Config;

/// Environment variable that overrides `api.session_token`.
pub const SESSION_TOKEN_ENV: &str = "FORUMKIT_SESSION_TOKEN";

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
    /// `<config_dir>/forumkit/config.toml`, falling back to the current
    /// directory when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("forumkit").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
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

    /// Replaces the session token when `token` is set and non-blank.
    pub fn with_session_override(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api.session_token = Some(token);
        }
        self
    }

    /// Applies [`SESSION_TOKEN_ENV`] from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_session_override(std::env::var(SESSION_TOKEN_ENV).ok())
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `api.base_url` is an http(s) URL
    /// - `api.timeout_seconds` is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("api.base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
