//! PageRank CLI
//!
//! Rank the pages of a hyperlinked HTML corpus.

use clap::Parser;
use pagerank_core::{exit_codes, RankError};
use std::process::ExitCode;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays the report
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match commands::rank::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<RankError>()
                .map(RankError::exit_code)
                .unwrap_or(exit_codes::GENERAL_ERROR);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
