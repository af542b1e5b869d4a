//! Common utilities shared across the CLI.

pub mod error;

pub use error::CliResult;
