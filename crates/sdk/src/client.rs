//! Lotus Client Implementation

use crate::error::Result;
use crate::settings::Settings;
use lotus_rpc_core::{rpc_params, ClientConfig, HttpTransport, RpcClient};
use lotus_rpc_infra_http::{ReqwestTransport, ReqwestTransportBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Lotus node client
///
/// Provides a high-level interface over the `Filecoin.*` JSON-RPC surface.
/// Results are returned as the node sent them.
///
/// # Example
///
/// ```no_run
/// use lotus_rpc_sdk::{ClientConfig, LotusClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LotusClient::connect(ClientConfig::new("http://127.0.0.1:1234/rpc/v0"))?;
/// let head = client.chain_head().await?;
/// println!("{}", head["Height"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LotusClient {
    rpc: RpcClient,
}

impl LotusClient {
    /// Connect to a Lotus node over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint URL and optional bearer token
    pub fn connect(config: ClientConfig) -> Result<Self> {
        Self::connect_with(config, ReqwestTransport::builder())
    }

    /// Connect with a customised HTTP transport (timeout, status policy)
    pub fn connect_with(config: ClientConfig, transport: ReqwestTransportBuilder) -> Result<Self> {
        let transport = transport.build()?;
        Self::from_transport(config, Arc::new(transport))
    }

    /// Build from loaded [`Settings`]
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut transport =
            ReqwestTransport::builder().accept_any_status(settings.accept_any_status);
        if let Some(timeout) = settings.timeout() {
            transport = transport.timeout(timeout);
        }
        Self::connect_with(settings.client_config(), transport)
    }

    /// Build from `LOTUS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_settings(&Settings::load(None)?)
    }

    /// Use any transport (test doubles, custom HTTP stacks)
    pub fn from_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let rpc = RpcClient::new(config, transport)?;
        tracing::debug!(api_address = %rpc.config().api_address, "Lotus client ready");
        Ok(Self { rpc })
    }

    /// Wrap an already configured engine
    pub fn from_rpc(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// Call `Filecoin.<method>` with positional params
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use lotus_rpc_sdk::{rpc_params, ClientConfig, LotusClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = LotusClient::connect(ClientConfig::new("http://127.0.0.1:1234/rpc/v0"))?;
    /// let nonce = client
    ///     .request("MpoolGetNonce", rpc_params!["t1mbk7q6gm4rjlndfqw6f2vkfgqotres3fgicb2uq"])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        Ok(self.rpc.request(method, params).await?)
    }

    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T> {
        Ok(self.rpc.request_as(method, params).await?)
    }

    /// `Filecoin.Version`
    pub async fn version(&self) -> Result<Value> {
        self.request("Version", rpc_params![]).await
    }

    /// `Filecoin.ChainHead`
    pub async fn chain_head(&self) -> Result<Value> {
        self.request("ChainHead", rpc_params![]).await
    }

    /// `Filecoin.ChainGetTipSetByHeight`
    ///
    /// # Arguments
    ///
    /// * `height` - Epoch to look up
    /// * `tipset_key` - Tipset to walk back from (`None` = current head)
    pub async fn chain_get_tipset_by_height(
        &self,
        height: i64,
        tipset_key: Option<Value>,
    ) -> Result<Value> {
        self.request(
            "ChainGetTipSetByHeight",
            rpc_params![height, tipset_key.unwrap_or(Value::Null)],
        )
        .await
    }

    /// `Filecoin.WalletBalance` (attoFIL as a decimal string)
    pub async fn wallet_balance(&self, address: impl Into<String>) -> Result<Value> {
        self.request("WalletBalance", rpc_params![address.into()])
            .await
    }

    /// `Filecoin.StateGetActor`
    pub async fn state_get_actor(
        &self,
        address: impl Into<String>,
        tipset_key: Option<Value>,
    ) -> Result<Value> {
        self.request(
            "StateGetActor",
            rpc_params![address.into(), tipset_key.unwrap_or(Value::Null)],
        )
        .await
    }

    /// `Filecoin.MpoolPending`
    pub async fn mpool_pending(&self, tipset_key: Option<Value>) -> Result<Value> {
        self.request(
            "MpoolPending",
            rpc_params![tipset_key.unwrap_or(Value::Null)],
        )
        .await
    }
}
