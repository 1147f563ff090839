//! Astral-style CLI output formatting.
//!
//! Consistent terminal output with support for JSON mode (for scripting),
//! quiet mode, and verbosity levels. Human output uses colored symbols;
//! JSON mode emits one `{"type", "payload"}` object per line.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::json;

use crate::domain::fiduciary::Verdict;
use crate::domain::map::Visibility;
use crate::domain::negotiation::{LeverageTier, MAX_SCORE};

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1+ = increasingly verbose).
    pub verbose: u8,
    /// Emit ANSI styling.
    pub color: bool,
}

impl OutputConfig {
    /// Create a new output configuration.
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
            color: true,
        }
    }

    /// Enable or disable ANSI styling.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(false, false, 0)
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Check if regular (non-JSON) output should be suppressed.
fn regular_output_suppressed(config: OutputConfig) -> bool {
    !config.json && config.quiet
}

/// Apply a style unless color is off or output is JSON.
fn styled(config: OutputConfig, text: &str, style: impl FnOnce(&str) -> String) -> String {
    if config.color && !config.json {
        style(text)
    } else {
        text.to_string()
    }
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return the global verbosity level from `-v` flags.
#[must_use]
pub fn verbosity() -> u8 {
    read_config().verbose
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    let config = read_config();
    if config.json || regular_output_suppressed(config) {
        return;
    }

    println!(
        "{} {}",
        styled(config, "fiducia", |t| t.bold().to_string()),
        styled(config, version, |t| t.dimmed().to_string())
    );
    println!();
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = read_config();
    let value = value.to_string();

    if config.json {
        emit_json_line("field", json!({ "label": label, "value": value }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    let label = format!("{label:<14}");
    println!("  {} {}", styled(config, &label, |t| t.dimmed().to_string()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("success", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {} {}", styled(config, "✓", |t| t.green().to_string()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("warning", json!({ "message": message }));
        return;
    }

    println!("  {} {}", styled(config, "⚠", |t| t.yellow().to_string()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    let config = read_config();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", styled(config, "×", |t| t.red().to_string()), message);
}

/// Print a section header.
pub fn section(title: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("section", json!({ "title": title }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!();
    println!("{}", styled(config, title, |t| t.bold().to_string()));
}

/// Print a note.
pub fn note(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("note", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!("  {}", styled(config, message, |t| t.dimmed().to_string()));
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("hint", json!({ "message": message }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    println!(
        "  {}: {}",
        styled(config, "hint", |t| t.cyan().dimmed().to_string()),
        styled(config, message, |t| t.dimmed().to_string())
    );
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    let config = read_config();

    if config.json {
        emit_json_line("lines", json!({ "content": content }));
        return;
    }
    if regular_output_suppressed(config) {
        return;
    }

    for line in content.lines() {
        println!("  {line}");
    }
}

/// Emit a typed JSON record (one per line).
pub fn record(kind: &str, payload: serde_json::Value) {
    emit_json_line(kind, payload);
}

/// Color a verdict the way the map colors pins.
pub fn verdict(verdict: Verdict) -> String {
    styled(read_config(), verdict.as_str(), |name| match verdict {
        Verdict::Oportunidad => name.green().to_string(),
        Verdict::Premium => name.magenta().to_string(),
        Verdict::Justo => name.cyan().to_string(),
        Verdict::Sospechoso => name.red().to_string(),
        Verdict::SinDatos => name.dimmed().to_string(),
    })
}

/// Color a leverage tier with its score.
pub fn leverage(tier: LeverageTier, score: u8) -> String {
    let text = format!("{score}/{MAX_SCORE} {tier}");
    styled(read_config(), &text, |text| match tier {
        LeverageTier::Alto => text.green().to_string(),
        LeverageTier::Moderado => text.yellow().to_string(),
        LeverageTier::Bajo => text.dimmed().to_string(),
    })
}

/// Color a map visibility state.
pub fn visibility(state: Visibility) -> String {
    styled(read_config(), &state.to_string(), |text| match state {
        Visibility::Pinned => text.yellow().bold().to_string(),
        Visibility::Clustered => text.green().to_string(),
        Visibility::Hidden => text.dimmed().to_string(),
    })
}
