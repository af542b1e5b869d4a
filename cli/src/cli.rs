//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! The conversion itself lives in the `commands` module.

use clap::Parser;
use ctf2json_core::emit::OutputStyle;
use ctf2json_core::graph::DEFAULT_MAX_DEPTH;

/// ctf2json - describe C types from CTF data as JSON
#[derive(Parser, Debug)]
#[command(name = "ctf2json", version, about, long_about = None)]
pub struct Cli {
    /// Object file or raw CTF container to read type data from
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: String,

    /// Type to describe; repeat to describe several
    #[arg(short = 't', long = "type", value_name = "TYPE", required = true)]
    pub types: Vec<String>,

    /// Write the document on a single line
    #[arg(long)]
    pub compact: bool,

    /// Deepest struct/array nesting to follow before giving up
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Fixed creation time (seconds since the epoch) for reproducible output
    #[arg(long, env = "SOURCE_DATE_EPOCH", hide = true)]
    pub created_at: Option<i64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn output_style(&self) -> OutputStyle {
        if self.compact {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn types_keep_order_and_duplicates() {
        let cli = Cli::try_parse_from(["ctf2json", "-f", "a.out", "-t", "a", "--type", "b", "-t", "a"])
            .unwrap();
        assert_eq!(cli.file, "a.out");
        assert_eq!(cli.types, ["a", "b", "a"]);
        assert_eq!(cli.output_style(), OutputStyle::Pretty);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn file_may_only_be_given_once() {
        let err = Cli::try_parse_from(["ctf2json", "-f", "a", "-f", "b", "-t", "int"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn file_and_type_are_required() {
        assert!(Cli::try_parse_from(["ctf2json", "-t", "int"]).is_err());
        assert!(Cli::try_parse_from(["ctf2json", "-f", "a.out"]).is_err());
    }

    #[test]
    fn compact_switches_style() {
        let cli = Cli::try_parse_from(["ctf2json", "-f", "a", "-t", "int", "--compact"]).unwrap();
        assert_eq!(cli.output_style(), OutputStyle::Compact);
    }
}
