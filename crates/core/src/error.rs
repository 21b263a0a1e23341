// Central Error Type for the request engine

use crate::port::TransportError;
use serde_json::Value;
use thiserror::Error;

/// Message used when the server reports an error without a usable message
pub const UNKNOWN_RPC_ERROR: &str = "Unknown jsonrpc error";

/// Client-level error type
///
/// Exactly one of these is returned per failed call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Required connection parameter missing; raised before any network activity
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP exchange itself failed (surfaced as the transport reported it)
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a JSON-RPC `error` object
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The reply (or its result) could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the server-side error if this is an RPC failure
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            ClientError::Rpc(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ClientError::Configuration(_))
    }
}

/// JSON-RPC error reported by the remote node
///
/// Displays exactly as `message`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct RpcError {
    pub code: Option<i64>,
    pub message: String,
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
