//! Transport error types.

use thiserror::Error;

/// Errors that prevent a probe from producing an HTTP status.
///
/// Non-2xx responses are not errors; they are returned as a [`ProbeResponse`].
///
/// [`ProbeResponse`]: super::ProbeResponse
#[derive(Debug, Error)]
pub enum TransportError {
    /// GitHub API or connection error (DNS, refused, reset, body read).
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The probe path is not a valid request URI.
    #[error("Invalid request path: {0}")]
    InvalidPath(#[from] http::uri::InvalidUri),
}
