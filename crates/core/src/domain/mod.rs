// Domain Layer - Pure envelope, header and configuration logic

pub mod config;
pub mod envelope;
pub mod headers;

// Re-exports
pub use config::ClientConfig;
pub use envelope::{
    RequestEnvelope, ResponseEnvelope, DEFAULT_REQUEST_ID, JSON_RPC_VERSION, NAMESPACE,
};
pub use headers::{is_truthy, sanitize_headers, HeaderSet};
