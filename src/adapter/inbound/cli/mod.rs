//! CLI module graph and command dispatch.

pub mod analyze;
pub mod cma;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod input;
pub mod map;
pub mod output;
pub mod paths;

use std::path::Path;

use command::{Cli, Commands, ConfigCommand};

use crate::error::{ConfigError, Error, Result};

/// Log level implied by `-v` flags; `None` keeps the configured level.
#[must_use]
pub const fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Run the parsed command.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Config(ConfigCommand::Init(args)) => {
            let path = args.path.as_deref().unwrap_or(&cli.config);
            config::execute_init(path, args.force)
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
        Commands::Analyze(args) => {
            let settings = config::load_or_default(&cli.config)?;
            analyze::execute(args, &settings)
        }
        Commands::Cma(args) => cma::execute(args),
        Commands::Map(args) => {
            let settings = config::load_or_default(&cli.config)?;
            map::execute(args, &settings)
        }
    }
}

/// Print an error, with a source diagnostic for TOML parse failures.
pub fn report_error(error: &Error, config_path: &Path) {
    if let Error::Config(ConfigError::Parse(parse)) = error {
        if !output::is_json() {
            if let Ok(src) = std::fs::read_to_string(config_path) {
                if let Some(diagnostic) = diagnostic::ConfigDiagnostic::from_toml(parse, &src) {
                    eprintln!("{}", diagnostic::render(&diagnostic));
                    return;
                }
            }
        }
    }
    output::error(&error.to_string());
}
