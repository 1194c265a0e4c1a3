//! Configuration management for issuelist.
//!
//! This module handles loading and validating user configuration: the
//! GraphQL endpoint and a handful of application settings.

mod settings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::api::DEFAULT_TIMEOUT_SECS;

pub use settings::Settings;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/graphql";

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "ISSUELIST_ENDPOINT";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value failed validation.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// The GraphQL endpoint URL.
    pub endpoint: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Application settings.
    pub settings: Settings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Reads `path` if given, otherwise the default config file. A missing
    /// file yields the defaults. The `ISSUELIST_ENDPOINT` environment
    /// variable overrides the endpoint from the file, and `endpoint`
    /// (from the command line) overrides both. Validation runs once, after
    /// every override has been applied.
    pub fn load(path: Option<&Path>, endpoint: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = Self::load_from(&path)?;

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.is_empty() {
                debug!(endpoint = %endpoint, "Endpoint overridden from environment");
                config.endpoint = endpoint;
            }
        }

        if let Some(endpoint) = endpoint {
            debug!(endpoint = %endpoint, "Endpoint overridden from command line");
            config = config.with_endpoint(endpoint);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file without applying overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - Linux: `~/.config/issuelist/config.toml`
    /// - macOS: `~/Library/Application Support/issuelist/config.toml`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\issuelist\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("issuelist").join("config.toml"))
    }

    /// Replace the endpoint, e.g. from a command-line flag.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate this configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ConfigError::ValidationError(
                "endpoint cannot be empty".to_string(),
            ));
        }

        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "endpoint '{}' must start with http:// or https://",
                self.endpoint
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        self.settings.validate().map_err(ConfigError::ValidationError)
    }
}
