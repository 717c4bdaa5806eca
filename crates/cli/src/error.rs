//! CLI errors

use rebate::functions::RunError;
use thiserror::Error;

/// Errors that end a command
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input document is not valid function input, or output failed to serialize
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The discount function rejected its input
    #[error(transparent)]
    Run(#[from] RunError),
}
