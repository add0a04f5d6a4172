//! Error types for the dashboard data sources.

use thiserror::Error;

/// Result type alias using [`SourceError`].
pub type Result<T> = std::result::Result<T, SourceError>;

/// Data source errors.
///
/// The dashboard never shows these to the user. A metrics error becomes a
/// 0% reading and a weather error blanks the weather panel until the next
/// successful refresh.
#[derive(Debug, Error)]
pub enum SourceError {
    /// CPU utilization could not be measured
    #[error("CPU sampling failed: {0}")]
    Metrics(String),

    /// HTTP client could not be built
    #[error("Failed to create HTTP client: {0}")]
    ClientSetup(String),

    /// HTTP request error (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Weather API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON document
    #[error("Invalid weather response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response decoded but is missing required data
    #[error("Incomplete weather response: {0}")]
    InvalidPayload(String),
}

impl SourceError {
    /// Check if this error is likely to clear up on its own (network
    /// hiccups, provider overload) rather than needing a config change.
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            SourceError::Status { status, .. } => *status == 429 || *status >= 500,
            SourceError::Metrics(_) => true,
            SourceError::ClientSetup(_)
            | SourceError::Decode(_)
            | SourceError::InvalidPayload(_) => false,
        }
    }
}
