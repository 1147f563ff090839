//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders TOML configuration errors with the offending span of the file.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(fiducia::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse error, if it carries a span.
    #[must_use]
    pub fn from_toml(error: &toml::de::Error, src: &str) -> Option<Self> {
        let span = error.span()?;
        Some(
            Self::new(error.message(), src, span.start, span.len().max(1))
                .with_help("run `fiducia config init` for a commented template"),
        )
    }
}

/// Render a diagnostic to a string using miette's graphical handler.
#[must_use]
pub fn render(diagnostic: &ConfigDiagnostic) -> String {
    let mut out = String::new();
    let handler = miette::GraphicalReportHandler::new();
    if handler.render_report(&mut out, diagnostic).is_err() {
        return diagnostic.to_string();
    }
    out
}
