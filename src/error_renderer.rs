//! Diagnostic rendering for ctf2json errors.
//!
//! Every error becomes a single line on the diagnostic stream, prefixed with
//! the program name: `ctf2json: type not present in binary: foo_t`.

use crate::Error;
use nu_ansi_term::Color;
use std::io::Write;

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Program name printed before the message.
    pub program: &'a str,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            program: "ctf2json",
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    if config.color {
        let program = Color::Red.bold().paint(config.program);
        writeln!(writer, "{program}: {error}")
    } else {
        writeln!(writer, "{}: {}", config.program, error)
    }
}
