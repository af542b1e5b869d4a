//! Conversion of the requested types to a JSON document on stdout.

use ctf2json::{ConvertOptions, convert_file};

use crate::cli::Cli;
use crate::common::CliResult;

/// Run the conversion described by the command line.
pub fn run(cli: &Cli) -> CliResult<()> {
    let options = ConvertOptions {
        max_depth: cli.max_depth,
        created_at: cli.created_at,
    };

    let document = convert_file(&cli.file, &cli.types, &options)?;
    tracing::debug!(nodes = document.data.len(), "document ready");

    document.write_to(&mut std::io::stdout().lock(), cli.output_style())?;
    Ok(())
}
