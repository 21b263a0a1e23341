// Lotus RPC Infrastructure - HTTP Adapter
// Implements: HttpTransport (reqwest)

pub mod error;
pub mod reqwest_transport;

pub use error::HttpTransportError;
pub use reqwest_transport::{ReqwestTransport, ReqwestTransportBuilder};
