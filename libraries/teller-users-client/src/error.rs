//! Error types for the users client.

use thiserror::Error;

/// Errors that can occur when talking to the users API.
///
/// These never cross the [`crate::UserRemoteRepository`] boundary; the
/// repository collapses all of them into an absent result.
#[derive(Error, Debug)]
pub enum UsersClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Failed to decode a response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid base URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Result type for users client operations.
pub type Result<T> = std::result::Result<T, UsersClientError>;
