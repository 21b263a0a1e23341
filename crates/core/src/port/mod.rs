// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic / multiplexed ids
pub mod transport;

// Re-exports
pub use id_provider::{FixedIdProvider, RequestIdProvider, SequentialIdProvider};
pub use transport::{HttpTransport, TransportError};
