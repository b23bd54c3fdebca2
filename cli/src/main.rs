//! # odata-envelope
//!
//! Command line front end for `odata_envelope`. Reads a `d`-wrapped OData response from stdin
//! or a file and writes the normalized JSON (or the pagination skip token) to stdout.

use std::process::ExitCode;

use args::Cli;
use clap::Parser;

mod args;
mod run;
mod support;

fn main() -> ExitCode {
    let cli = Cli::parse();

    cli.log_level.init_stderr_tracing();

    match run::run(&cli, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!(mode = %cli.mode, "Extraction failed");
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}
