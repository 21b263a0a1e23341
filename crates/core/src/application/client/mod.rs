// RPC Client - one HTTP exchange per call

#[cfg(test)]
mod request_test;

use crate::domain::{sanitize_headers, ClientConfig, HeaderSet, RequestEnvelope, ResponseEnvelope};
use crate::error::Result;
use crate::port::{FixedIdProvider, HttpTransport, RequestIdProvider};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lotus nodes expect this exact value even though the body is JSON
pub const CONTENT_TYPE: &str = "text/plain;charset=UTF-8";
pub const ACCEPT: &str = "*/*";

/// JSON-RPC client for a Lotus node
///
/// Holds an immutable [`ClientConfig`] and an injected transport. Calls
/// are independent and may run concurrently from the same client.
///
/// # Example
///
/// ```no_run
/// use lotus_rpc_core::{rpc_params, ClientConfig, HttpTransport, RpcClient};
/// use std::sync::Arc;
///
/// # async fn example(transport: Arc<dyn HttpTransport>) -> lotus_rpc_core::Result<()> {
/// let client = RpcClient::new(ClientConfig::new("http://127.0.0.1:1234/rpc/v0"), transport)?;
/// let head = client.request("ChainHead", rpc_params![]).await?;
/// println!("{}", head);
/// # Ok(())
/// # }
/// ```
pub struct RpcClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    id_provider: Arc<dyn RequestIdProvider>,
}

impl RpcClient {
    /// Create a client
    ///
    /// # Errors
    /// - ClientError::Configuration if `api_address` is empty
    pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            id_provider: Arc::new(FixedIdProvider),
        })
    }

    /// Replace the fixed request id with another provider
    pub fn with_id_provider(mut self, id_provider: Arc<dyn RequestIdProvider>) -> Self {
        self.id_provider = id_provider;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Headers sent with every call (falsy entries removed)
    pub fn headers(&self) -> HeaderSet {
        let authorization = match self.config.bearer_token() {
            Some(token) => Value::String(format!("Bearer {}", token)),
            None => Value::Null,
        };

        sanitize_headers([
            ("Content-Type", Value::from(CONTENT_TYPE)),
            ("Accept", Value::from(ACCEPT)),
            ("Authorization", authorization),
        ])
    }

    /// Call `Filecoin.<method>` with positional `params`
    ///
    /// Returns the reply's `result` as sent by the node (`null` if absent).
    ///
    /// # Errors
    /// - ClientError::Transport if the HTTP exchange fails
    /// - ClientError::Rpc if the reply carries an `error`
    /// - ClientError::MalformedResponse if the reply is not a JSON-RPC object
    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        let envelope = RequestEnvelope::with_id(method, params, self.id_provider.next_id());
        let body = serde_json::to_value(&envelope)?;
        let headers = self.headers();

        debug!(
            method = %envelope.method,
            id = envelope.id,
            params = envelope.params.len(),
            "Sending JSON-RPC request"
        );

        let reply = self
            .transport
            .post(&self.config.api_address, &body, &headers)
            .await
            .map_err(|e| {
                warn!(method = %envelope.method, error = %e, "JSON-RPC transport failed");
                e
            })?;

        let response = ResponseEnvelope::from_value(reply)?
            .check_error()
            .map_err(|e| {
                debug!(
                    method = %envelope.method,
                    code = ?e.code,
                    message = %e.message,
                    "JSON-RPC error reply"
                );
                e
            })?;

        Ok(response.into_result())
    }

    /// Same as [`request`](Self::request), decoding the result into `T`
    ///
    /// # Errors
    /// - ClientError::MalformedResponse if the result does not fit `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T> {
        let result = self.request(method, params).await?;
        Ok(serde_json::from_value(result)?)
    }
}

impl fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcClient")
            .field("config", &self.config)
            .field("transport", &"<dyn HttpTransport>")
            .finish()
    }
}
