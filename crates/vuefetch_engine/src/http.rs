//! Reqwest-backed transport.

use async_trait::async_trait;
use tracing::debug;

use crate::transport::{HttpResponse, Transport, TransportError, TransportResult};

/// Production [`Transport`] built on a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing client (connection pools,
    /// proxies and TLS settings come along with it).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn http_get(&self, url: &str) -> TransportResult<HttpResponse> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(HttpResponse { status, body })
    }
}
