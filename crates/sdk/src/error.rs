//! SDK Error Types

use lotus_rpc_core::ClientError;
use lotus_rpc_infra_http::HttpTransportError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration, transport or RPC failure from the request engine
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl SdkError {
    /// Server-side JSON-RPC error, if that is what failed
    pub fn as_rpc(&self) -> Option<&lotus_rpc_core::RpcError> {
        match self {
            SdkError::Client(e) => e.as_rpc(),
            _ => None,
        }
    }
}

impl From<HttpTransportError> for SdkError {
    fn from(e: HttpTransportError) -> Self {
        SdkError::Connection(format!("Failed to create HTTP client: {}", e))
    }
}
