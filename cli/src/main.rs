//! ctf2json CLI - describe C types from CTF data as JSON.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    // Usage errors exit with 1 like every other failure; help and version
    // output still succeed.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print().ok();
            std::process::exit(code);
        }
    };

    if let Err(e) = commands::convert::run(&cli) {
        common::error::render_and_exit(e, cli.no_color);
    }
}
