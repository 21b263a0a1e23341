//! Error types for the reqwest transport.
//!
//! Every variant ends up wrapped in a
//! [`TransportError`](lotus_rpc_core::TransportError) at the port boundary;
//! callers that need the detail can `downcast_ref::<HttpTransportError>()`.

use thiserror::Error;

/// Errors that can occur while exchanging one request with the node.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// Connection refused, DNS failure, TLS errors and timeouts land here.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The node answered with a non-success status and the transport is
    /// configured to reject those.
    #[error("Server error {status}: {body}")]
    Status {
        /// The HTTP status code returned by the node.
        status: reqwest::StatusCode,
        /// The response body, kept for debugging.
        body: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpTransportError {
    /// HTTP status of the failed exchange, when one was received
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            HttpTransportError::Status { status, .. } => Some(*status),
            HttpTransportError::Request(e) => e.status(),
            _ => None,
        }
    }
}
