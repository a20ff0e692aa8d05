//! HTTP transport for GitHub REST API probes.
//!
//! Every check goes through [`Transport::send`], which issues exactly one
//! request and reports the status code (and body for GET). The production
//! implementation, [`GitHubClient`], is backed by octocrab with its retry
//! middleware disabled and no authentication.

mod error;
mod request;

pub use error::TransportError;
pub use request::{ProbeMethod, ProbeRequest, ProbeResponse};

use http::header::USER_AGENT;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::future::Future;
use tracing::debug;

/// Default GitHub REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "openjs-security-monitor";

/// Issues a single HTTP request for a probe.
pub trait Transport {
    /// Sends `request` once.
    ///
    /// Any HTTP status is a successful response; only failures that prevent
    /// a status from being received are errors.
    fn send(
        &self,
        request: &ProbeRequest,
    ) -> impl Future<Output = Result<ProbeResponse, TransportError>> + Send;
}

/// Unauthenticated octocrab-backed [`Transport`].
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client for `base_url` that identifies itself as `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the base URL is not a valid URI or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, TransportError> {
        let octocrab = Octocrab::builder()
            .base_uri(base_url)?
            .add_header(USER_AGENT, user_agent.to_string())
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self { octocrab })
    }
}

impl Transport for GitHubClient {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, TransportError> {
        let uri: http::Uri = request.path.parse()?;
        let builder = http::Request::builder()
            .method(request.method.as_http())
            .uri(uri);

        let http_request = self.octocrab.build_request::<()>(builder, None)?;
        let response = self.octocrab.execute(http_request).await?;
        let status = response.status().as_u16();
        debug!(method = %request.method, path = %request.path, status, "Received response");

        let body = match request.method {
            ProbeMethod::Head => String::new(),
            ProbeMethod::Get => self.octocrab.body_to_string(response).await?,
        };

        Ok(ProbeResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_methods_map_to_http() {
        assert_eq!(ProbeMethod::Head.as_http(), http::Method::HEAD);
        assert_eq!(ProbeMethod::Get.as_http(), http::Method::GET);
        assert_eq!(ProbeMethod::Head.to_string(), "HEAD");
    }

    #[test]
    fn request_constructors_set_method() {
        let head = ProbeRequest::head("/repos/o/r/contents/a");
        let get = ProbeRequest::get("/repos/o/r/security-advisories");

        assert_eq!(head.method, ProbeMethod::Head);
        assert_eq!(get.method, ProbeMethod::Get);
        assert_eq!(get.path, "/repos/o/r/security-advisories");
    }

    #[tokio::test]
    async fn invalid_path_is_a_transport_error() {
        let client = GitHubClient::new("http://127.0.0.1:9", DEFAULT_USER_AGENT).unwrap();
        let result = client
            .send(&ProbeRequest::head("/repos/o/r/contents/has space.md"))
            .await;

        assert!(matches!(result, Err(TransportError::InvalidPath(_))));
    }
}
