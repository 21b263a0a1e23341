//! SDK Settings
//!
//! Layered: optional TOML file, then `LOTUS_*` environment variables.
//!
//! ```toml
//! api_address = "http://127.0.0.1:1234/rpc/v0"
//! token = "eyJhbGciOiJIUzI1NiJ9..."
//! timeout_secs = 30
//! accept_any_status = false
//! ```

use crate::error::Result;
use lotus_rpc_core::ClientConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix (`LOTUS_API_ADDRESS`, `LOTUS_TOKEN`, ...)
pub const ENV_PREFIX: &str = "LOTUS";

/// Connection settings for [`LotusClient`](crate::LotusClient)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_address: String,
    #[serde(default)]
    pub token: Option<String>,
    /// Per-request timeout; none when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Parse JSON-RPC bodies of non-2xx replies instead of failing
    #[serde(default)]
    pub accept_any_status: bool,
}

impl Settings {
    /// Load from `path` (if given) and the `LOTUS_` environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// Same as [`load`](Self::load) with a custom environment prefix
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            );
        }

        // Values stay strings until serde sees the field type; tokens must not be reparsed
        builder = builder.add_source(config::Environment::with_prefix(env_prefix));

        let settings: Settings = builder.build()?.try_deserialize()?;
        tracing::debug!(
            api_address = %settings.api_address,
            has_token = settings.token.is_some(),
            "Loaded settings"
        );
        Ok(settings)
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_address.clone());
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
