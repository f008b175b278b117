//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
///
/// The serialization core itself is total; failures only arise at the
/// edges, when writing files or encoding JSON.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error while writing the feed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the calendar as JSON.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to initialize tracing.
    #[error("tracing setup failed: {0}")]
    Tracing(#[from] icalfeed_core::TracingError),
}
