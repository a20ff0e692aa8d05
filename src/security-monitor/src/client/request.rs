//! Probe request and response types.

use std::fmt;

/// HTTP method used by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    /// File-existence checks; no body is read.
    Head,
    /// Checks that need the response body.
    Get,
}

impl ProbeMethod {
    /// Returns the equivalent [`http::Method`].
    #[must_use]
    pub fn as_http(self) -> http::Method {
        match self {
            Self::Head => http::Method::HEAD,
            Self::Get => http::Method::GET,
        }
    }
}

impl fmt::Display for ProbeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Head => f.write_str("HEAD"),
            Self::Get => f.write_str("GET"),
        }
    }
}

/// A single request against the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// HTTP method.
    pub method: ProbeMethod,

    /// Path and query relative to the API base URL (e.g., "/repos/o/r/contents/x").
    pub path: String,
}

impl ProbeRequest {
    /// Creates a HEAD probe.
    pub fn head(path: impl Into<String>) -> Self {
        Self {
            method: ProbeMethod::Head,
            path: path.into(),
        }
    }

    /// Creates a GET probe.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ProbeMethod::Get,
            path: path.into(),
        }
    }
}

/// The parts of an HTTP response a check classifies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response body; empty for HEAD probes.
    pub body: String,
}

impl ProbeResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
