// Lotus RPC Core - Request engine & Ports
// NO transport dependencies (hexagonal layout: HTTP lives in infra-http)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::RpcClient;
pub use domain::{ClientConfig, HeaderSet, RequestEnvelope, ResponseEnvelope};
pub use error::{ClientError, Result, RpcError};
pub use port::{HttpTransport, RequestIdProvider, TransportError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the positional parameter list for [`RpcClient::request`].
///
/// Every argument is converted with `serde_json::json!`, order is kept.
///
/// ```
/// use lotus_rpc_core::rpc_params;
///
/// let params = rpc_params!["t1mbk7q6gm4rjlndfqw6f2vkfgqotres3fgicb2uq", 42];
/// assert_eq!(params.len(), 2);
/// assert!(rpc_params![].is_empty());
/// ```
#[macro_export]
macro_rules! rpc_params {
    () => {
        ::std::vec::Vec::<$crate::__private::Value>::new()
    };
    ($($param:expr),+ $(,)?) => {
        ::std::vec![$($crate::__private::json!($param)),+]
    };
}

#[doc(hidden)]
pub mod __private {
    pub use serde_json::{json, Value};
}
