//! Configuration
//!
//! Only the logging layer is configurable. Every field is optional:
//!
//! ```json
//! { "log_level": "info", "log_target": "stdout" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event, Logger, Severity};

pub use crate::observability::LogTarget;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CVA_CONFIG_IO",
            ConfigError::Json(_) => "CVA_CONFIG_JSON",
            ConfigError::Invalid(_) => "CVA_CONFIG_INVALID",
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lowest severity written (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,

    /// Destination for lines below ERROR (default: stderr)
    #[serde(default = "default_log_target")]
    pub log_target: LogTarget,
}

fn default_log_level() -> Severity {
    Severity::Warn
}

fn default_log_target() -> LogTarget {
    LogTarget::Stderr
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_target: default_log_target(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from JSON text
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        // Nothing in this crate logs at FATAL.
        if self.log_level == Severity::Fatal {
            return Err(ConfigError::Invalid(
                "log_level 'fatal' is not supported; use 'error' or lower".into(),
            ));
        }
        Ok(())
    }

    /// Installs the logger settings process-wide.
    pub fn apply(&self) {
        Logger::set_min_severity(self.log_level);
        Logger::set_target(self.log_target);
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("log_level", self.log_level.as_str()),
                ("log_target", target_name(self.log_target)),
            ],
        );
    }
}

fn target_name(target: LogTarget) -> &'static str {
    match target {
        LogTarget::Stdout => "stdout",
        LogTarget::Stderr => "stderr",
        LogTarget::Off => "off",
    }
}
