//! Rebate CLI
//!
//! Runs the discount functions over JSON documents read from a file or stdin
//! and writes the resulting operations to stdout.

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::Cli;

mod commands;
mod config;
mod error;

fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests also arrive here
            _ = err.print();

            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logging; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(cli.env_filter())
        .with_writer(io::stderr)
        .init();

    match cli
        .command
        .execute(io::stdin().lock(), io::stdout().lock(), cli.pretty)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}
