// Connection configuration (immutable once a client owns it)

use crate::error::{ClientError, Result};
use serde::Deserialize;
use std::fmt;

/// Where and how to reach the node
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Full JSON-RPC endpoint URL, e.g. `http://127.0.0.1:1234/rpc/v0`
    #[serde(default)]
    pub api_address: String,
    /// Bearer token; empty means no `Authorization` header
    #[serde(default)]
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(api_address: impl Into<String>) -> Self {
        Self {
            api_address: api_address.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Token if one is set and non-empty
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_address.trim().is_empty() {
            return Err(ClientError::Configuration(
                "apiAddress is required".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_address", &self.api_address)
            .field("token", &self.bearer_token().map(|_| "<redacted>"))
            .finish()
    }
}
