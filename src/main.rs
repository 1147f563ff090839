use std::io::IsTerminal;

use clap::Parser;
use fiducia::adapter::inbound::cli::command::{Cli, ColorChoice};
use fiducia::adapter::inbound::cli::output::{self, OutputConfig};
use fiducia::adapter::inbound::cli::{config, dispatch, report_error, verbosity_level};
use tracing::info;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose).with_color(color));

    // Logging comes from the config file when it loads; a broken file is
    // reported by the command itself.
    let settings = config::load_or_default(&cli.config).unwrap_or_default();
    let logging = match verbosity_level(cli.verbose) {
        Some(level) => settings.logging.with_level(level),
        None => settings.logging.clone(),
    };
    logging.init();
    info!(version = env!("CARGO_PKG_VERSION"), "fiducia starting");

    if let Err(e) = dispatch(&cli) {
        report_error(&e, &cli.config);
        std::process::exit(1);
    }
}
