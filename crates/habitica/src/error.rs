//! Error types for the Habitica client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Habitica API.
#[derive(Debug, Error)]
pub enum HabiticaError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Habitica returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// A success response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl HabiticaError {
    /// Whether the server answered and refused the request.
    ///
    /// Rejections are per-request outcomes; every other variant means the
    /// conversation with the server itself broke down.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Status code of a rejected request.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
