//! Transport trait and types.
//!
//! The engine never issues HTTP itself; it is handed a [`Transport`]
//! capability at construction. Production code injects
//! [`ReqwestTransport`](crate::http::ReqwestTransport), tests inject
//! [`MockTransport`](crate::mock::MockTransport).

use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A raw fetch result. Transient: the engine discards it after parsing.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// Build a 200 response, for tests and pre-canned routes.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Build a bodyless response with the given status.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    /// Whether the status counts as a successful fetch. 304 is accepted
    /// alongside 200 so revalidated cache responses resolve normally.
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 304)
    }
}

/// Errors that can occur below the HTTP status level.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request to '{url}' failed: {message}")]
    Request { url: String, message: String },
}

/// The injected fetch capability.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request and return status plus body text.
    async fn http_get(&self, url: &str) -> TransportResult<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(HttpResponse::ok("body").is_success());
        assert!(HttpResponse { status: 304, body: String::new() }.is_success());
        assert!(!HttpResponse::status(404).is_success());
        assert!(!HttpResponse::status(500).is_success());
        assert!(!HttpResponse::status(301).is_success());
    }
}
