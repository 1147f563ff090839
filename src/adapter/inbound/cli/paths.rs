//! Path utilities for fiducia.
//!
//! User-level settings live under `~/.fiducia/config.toml`.

use std::path::PathBuf;

/// Returns the fiducia home directory (`~/.fiducia/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fiducia")
}

/// Returns the default config file path (`~/.fiducia/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
