//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; an empty file yields the defaults.
//!
//! # Example
//!
//! ```no_run
//! use fiducia::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::map::MapConfig;
use crate::domain::map::FilterSettings;
use crate::domain::thresholds::GroupThresholds;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zone time-on-market thresholds.
    ///
    /// Used as defaults for every result set that does not carry its own.
    #[serde(default)]
    pub thresholds: GroupThresholds,

    /// Map filtering and favorites settings.
    #[serde(default)]
    pub map: MapConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// An unordered threshold pair (median not below mean) is accepted with a
    /// warning; the classifier tolerates it.
    fn validate(&self) -> Result<()> {
        if self.thresholds.dias_mediana_zona == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dias_mediana_zona",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.thresholds.dias_promedio_zona == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dias_promedio_zona",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !self.thresholds.is_ordered() {
            warn!(
                dias_mediana_zona = self.thresholds.dias_mediana_zona,
                dias_promedio_zona = self.thresholds.dias_promedio_zona,
                "median days on market is not below the mean"
            );
        }

        if self.map.top_n == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_n",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.map.max_selected == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_selected",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Map filter settings derived from this config.
    #[must_use]
    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings {
            top_n: self.map.top_n,
            category_rule: self.map.category_rule,
            thresholds: self.thresholds,
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
