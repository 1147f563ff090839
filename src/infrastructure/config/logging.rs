//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats accepted by [`LoggingConfig::format`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so command output on stdout stays machine-readable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        // A subscriber may already be installed (tests); keep it.
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }

    /// Same config with the level overridden, e.g. from `-v` flags.
    #[must_use]
    pub fn with_level(&self, level: &str) -> Self {
        Self {
            level: level.to_string(),
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
