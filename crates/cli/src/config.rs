//! Command line configuration

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Rebate discount function runner
#[derive(Debug, Parser)]
#[command(name = "rebate", about = "Run rebate discount functions", long_about = None)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub(crate) log_level: String,

    /// Pretty-print JSON output
    #[arg(long, env = "REBATE_PRETTY", global = true)]
    pub(crate) pretty: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Log filter built from `--log-level`, which already falls back to
    /// `RUST_LOG`. An unparsable directive falls back to `info`.
    pub(crate) fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
