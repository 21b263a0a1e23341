// Application Layer - Request orchestration

pub mod client;

// Re-exports
pub use client::RpcClient;
