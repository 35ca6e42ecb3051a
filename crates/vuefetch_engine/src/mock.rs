//! Mock transport for testing.
//!
//! Provides a configurable in-memory implementation of the Transport
//! trait so resolution behavior can be tested without a network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::transport::{HttpResponse, Transport, TransportError, TransportResult};

/// Mock transport for testing.
///
/// Routes are registered per URL and every request is captured, so tests
/// can verify both what was resolved and exactly which fetches happened.
/// Unrouted URLs answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Predefined responses keyed by exact URL.
    routes: Arc<RwLock<HashMap<String, HttpResponse>>>,
    /// Captured request URLs, in order.
    requests: Arc<RwLock<Vec<String>>>,
    /// Simulated transport-level failure message, if any.
    simulate_failure: Arc<RwLock<Option<String>>>,
}

impl MockTransport {
    /// Create a new mock transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a 200 response for a URL.
    pub fn route_ok(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes
            .write()
            .insert(url.into(), HttpResponse::ok(body));
        self
    }

    /// Register an arbitrary response for a URL.
    pub fn route(self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.routes.write().insert(url.into(), response);
        self
    }

    /// Make every request fail below the HTTP level.
    pub fn fail_with(self, message: impl Into<String>) -> Self {
        *self.simulate_failure.write() = Some(message.into());
        self
    }

    /// All URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.read().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }

    /// Number of requests for one specific URL.
    pub fn count_for(&self, url: &str) -> usize {
        self.requests.read().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn http_get(&self, url: &str) -> TransportResult<HttpResponse> {
        self.requests.write().push(url.to_string());

        if let Some(message) = self.simulate_failure.read().clone() {
            return Err(TransportError::Request {
                url: url.to_string(),
                message,
            });
        }

        Ok(self
            .routes
            .read()
            .get(url)
            .cloned()
            .unwrap_or_else(|| HttpResponse::status(404)))
    }
}
