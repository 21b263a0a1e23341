// reqwest transport implementation
use async_trait::async_trait;
use lotus_rpc_core::domain::HeaderSet;
use lotus_rpc_core::port::{HttpTransport, TransportError};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::HttpTransportError;

/// Builder for [`ReqwestTransport`]
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    accept_any_status: bool,
}

impl ReqwestTransportBuilder {
    /// Per-request timeout (none by default)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Parse the body of non-2xx replies instead of failing the exchange
    pub fn accept_any_status(mut self, accept: bool) -> Self {
        self.accept_any_status = accept;
        self
    }

    pub fn build(self) -> Result<ReqwestTransport, HttpTransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestTransport {
            client: builder.build()?,
            accept_any_status: self.accept_any_status,
        })
    }
}

/// HTTP transport backed by a `reqwest::Client`
///
/// The body is sent as raw JSON text so the caller's `Content-Type` header
/// is kept as given. By default a non-2xx status fails the exchange.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    accept_any_status: bool,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpTransportError> {
        Self::builder().build()
    }

    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an existing client (status policy: reject non-2xx)
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            accept_any_status: false,
        }
    }

    async fn exchange(
        &self,
        url: &str,
        body: &Value,
        headers: &HeaderSet,
    ) -> Result<Value, HttpTransportError> {
        let payload = serde_json::to_vec(body).map_err(HttpTransportError::Encode)?;

        let mut request = self.client.post(url).body(payload);
        for (name, value) in headers.iter() {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() && !self.accept_any_status {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(HttpTransportError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        debug!(status = %status, bytes = bytes.len(), "Received HTTP response");

        serde_json::from_slice(&bytes).map_err(HttpTransportError::Decode)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: &Value,
        headers: &HeaderSet,
    ) -> Result<Value, TransportError> {
        self.exchange(url, body, headers).await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP exchange failed");
            TransportError::new(e)
        })
    }
}
