//! API error types for the schedule client.

use thiserror::Error;

/// Errors that can occur when fetching the schedule table.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or HTTP transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP {status}: {context}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
        /// The URL or body excerpt the status refers to.
        context: String,
    },

    /// The response body was not a valid schedule table.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured endpoint is not a usable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            context: context.to_string(),
        }
    }

    /// Whether the failure happened before any response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
