//! In-memory [`Transport`] for unit tests.

use crate::client::{ProbeRequest, ProbeResponse, Transport, TransportError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned reply for a path.
#[derive(Debug, Clone)]
pub(crate) enum FakeReply {
    Status(u16, String),
    Unreachable,
}

/// Answers probes from a path table; unknown paths get a 404.
#[derive(Debug, Default)]
pub(crate) struct FakeTransport {
    routes: HashMap<String, FakeReply>,
    calls: Mutex<Vec<ProbeRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_status(mut self, path: &str, status: u16) -> Self {
        self.routes
            .insert(path.to_string(), FakeReply::Status(status, String::new()));
        self
    }

    pub(crate) fn with_body(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(path.to_string(), FakeReply::Status(status, body.to_string()));
        self
    }

    pub(crate) fn unreachable(mut self, path: &str) -> Self {
        self.routes.insert(path.to_string(), FakeReply::Unreachable);
        self
    }

    pub(crate) fn calls(&self) -> Vec<ProbeRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, TransportError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        self.calls.lock().unwrap().push(request.clone());

        tokio::task::yield_now().await;

        let reply = self
            .routes
            .get(&request.path)
            .cloned()
            .unwrap_or(FakeReply::Status(404, String::new()));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            FakeReply::Status(status, body) => Ok(ProbeResponse::new(status, body)),
            FakeReply::Unreachable => Err(transport_failure()),
        }
    }
}

/// A transport error for unreachable routes.
///
/// `octocrab::Error` cannot be built outside octocrab; real connection
/// failures are covered by `tests/monitor.rs`.
pub(crate) fn transport_failure() -> TransportError {
    let err = "unreachable host"
        .parse::<http::Uri>()
        .expect_err("spaces are not valid in a URI");
    TransportError::InvalidPath(err)
}
