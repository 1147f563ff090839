//! Command-line interface definitions.
//!
//! Defines the CLI structure for the fiducia application using `clap`.
//! Each analysis subcommand reads a JSON export and prints the interpreted
//! result; `config` manages the TOML configuration file.

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::domain::map::{BaseSet, MapCategory};

/// Fiduciary interpretation of property-listing analytics
#[derive(Parser, Debug)]
#[command(name = "fiducia")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the fiducia CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret a JSON array of analytics records
    Analyze(AnalyzeArgs),

    /// Build a CMA price-band report
    Cma(CmaArgs),

    /// Evaluate map visibility for a filter combination
    Map(MapArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `fiducia config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate the configuration file for correctness.
    Validate,
}

/// Arguments for `fiducia config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the global `--config` path).
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// JSON file with an array of analytics records.
    pub file: PathBuf,

    /// Median days on market in the zone (overrides config).
    #[arg(long)]
    pub mediana: Option<u32>,

    /// Mean days on market in the zone (overrides config).
    #[arg(long)]
    pub promedio: Option<u32>,
}

/// Arguments for the `cma` subcommand.
#[derive(Parser, Debug)]
pub struct CmaArgs {
    /// JSON file with one CMA input object.
    pub file: PathBuf,
}

/// Arguments for the `map` subcommand.
#[derive(Parser, Debug)]
pub struct MapArgs {
    /// JSON file with an array of map listings in ranked order.
    pub file: PathBuf,

    /// Base set to start from.
    #[arg(long, value_enum, default_value = "top")]
    pub base: BaseArg,

    /// Category chips to keep (comma-separated).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub category: Vec<CategoryArg>,

    /// Inclusive lower price bound.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Inclusive upper price bound.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Listing ids to pin as favorites (repeatable).
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
}

/// `--base` values.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BaseArg {
    Top,
    All,
}

impl From<BaseArg> for BaseSet {
    fn from(arg: BaseArg) -> Self {
        match arg {
            BaseArg::Top => Self::Top,
            BaseArg::All => Self::All,
        }
    }
}

/// `--category` values.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    Oportunidad,
    Justo,
    Premium,
}

impl From<CategoryArg> for MapCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Oportunidad => Self::Oportunidad,
            CategoryArg::Justo => Self::Justo,
            CategoryArg::Premium => Self::Premium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "fiducia");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["fiducia", "analyze", "a.json", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorChoice::Auto));
    }

    #[test]
    fn analyze_threshold_overrides() {
        let cli =
            Cli::try_parse_from(["fiducia", "analyze", "a.json", "--mediana", "60"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.mediana, Some(60));
        assert_eq!(args.promedio, None);
    }

    #[test]
    fn map_parses_category_list_and_prices() {
        let cli = Cli::try_parse_from([
            "fiducia",
            "map",
            "m.json",
            "--base",
            "all",
            "--category",
            "oportunidad,premium",
            "--min-price",
            "100000",
            "--select",
            "7",
            "--select",
            "9",
        ])
        .unwrap();
        let Commands::Map(args) = cli.command else {
            panic!("expected map");
        };
        assert!(matches!(args.base, BaseArg::All));
        assert_eq!(args.category.len(), 2);
        assert_eq!(args.min_price, Some(dec!(100000)));
        assert_eq!(args.max_price, None);
        assert_eq!(args.select, vec!["7", "9"]);
    }

    #[test]
    fn map_rejects_unknown_category() {
        let result = Cli::try_parse_from(["fiducia", "map", "m.json", "--category", "sospechoso"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_init_force() {
        let cli = Cli::try_parse_from(["fiducia", "config", "init", "--force"]).unwrap();
        let Commands::Config(ConfigCommand::Init(args)) = cli.command else {
            panic!("expected config init");
        };
        assert!(args.force);
        assert!(args.path.is_none());
    }
}
