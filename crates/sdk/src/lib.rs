//! Lotus RPC SDK - Rust Client Library
//!
//! Provides a convenient client for the `Filecoin.*` JSON-RPC surface of a
//! Lotus node, with optional bearer-token authentication.
//!
//! # Example
//!
//! ```no_run
//! use lotus_rpc_sdk::{rpc_params, ClientConfig, LotusClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect to node
//!     let config = ClientConfig::new("http://127.0.0.1:1234/rpc/v0").with_token("my-jwt");
//!     let client = LotusClient::connect(config)?;
//!
//!     // Any method, positional params
//!     let balance = client
//!         .request("WalletBalance", rpc_params!["t1mbk7q6gm4rjlndfqw6f2vkfgqotres3fgicb2uq"])
//!         .await?;
//!
//!     println!("Balance: {}", balance);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod settings;

pub use client::LotusClient;
pub use error::{Result, SdkError};
pub use lotus_rpc_core::{rpc_params, ClientConfig, ClientError, RpcError};
pub use lotus_rpc_infra_http::{ReqwestTransport, ReqwestTransportBuilder};
pub use serde_json::Value;
pub use settings::Settings;
