//! Error types for search requests.
//!
//! Every failure of a submission ends up here so the controller can show
//! an error state instead of staying in the loading state.

use thiserror::Error;

/// Errors that can occur while querying the search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configured base URL could not be turned into an endpoint
    #[error("Invalid search endpoint '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Failed to reach the backend or read its response
    #[error("Connection to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not a valid result envelope
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            SearchError::InvalidUrl { .. } => "invalid_url",
            SearchError::Client(_) => "client_error",
            SearchError::Transport { .. } => "transport_error",
            SearchError::Timeout { .. } => "timeout",
            SearchError::Status { .. } => "status_error",
            SearchError::Decode(_) => "decode_error",
        }
    }

    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::InvalidUrl { .. } | SearchError::Client(_) => {
                "Search is not configured correctly"
            }
            SearchError::Transport { .. } => "Could not reach the search service",
            SearchError::Timeout { .. } => "The search took too long",
            SearchError::Status { .. } => "The search service reported an error",
            SearchError::Decode(_) => "The search service sent an unreadable response",
        }
    }
}
