//! Runner error types.

/// Errors that stop a run before or outside of the checks.
///
/// Individual checks never produce a `RunnerError`.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading and state directory errors.
    #[error(transparent)]
    Config(#[from] crate::repositories::ConfigError),

    /// The API base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Transport(#[from] crate::client::TransportError),
}
