//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Load the config file, or the defaults when it does not exist.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load(path)
    } else {
        debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::default())
    }
}

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your zone thresholds", path.display()));
    output::note(&format!(
        "2. Run: fiducia config validate -c {}",
        path.display()
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = load_or_default(path)?;

    if output::is_json() {
        output::record("config", serde_json::to_value(&config)?);
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Thresholds");
    output::field(
        "Mediana zona",
        format!("{} días", config.thresholds.dias_mediana_zona),
    );
    output::field(
        "Promedio zona",
        format!("{} días", config.thresholds.dias_promedio_zona),
    );

    output::section("Map");
    output::field("Top N", config.map.top_n);
    output::field("Max selected", config.map.max_selected);
    output::field(
        "Category rule",
        format!("{:?}", config.map.category_rule).to_lowercase(),
    );

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if !config.thresholds.is_ordered() {
        output::section("Warnings");
        output::warning("dias_mediana_zona is not below dias_promedio_zona");
    }

    output::field(
        "Next",
        format!("fiducia config show -c {}", path.display()),
    );

    Ok(())
}
