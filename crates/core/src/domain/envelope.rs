//! JSON-RPC 2.0 request/response envelopes.

use crate::domain::headers::is_truthy;
use crate::error::{RpcError, UNKNOWN_RPC_ERROR};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSON_RPC_VERSION: &str = "2.0";

/// Prefix prepended to every method name
pub const NAMESPACE: &str = "Filecoin";

/// Id sent with every request unless a client is given another id provider
pub const DEFAULT_REQUEST_ID: u64 = 1;

/// Outgoing request object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl RequestEnvelope {
    /// Build a request for `<NAMESPACE>.<method>` with id 1
    ///
    /// No validation of the method name or params is done.
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self::with_id(method, params, DEFAULT_REQUEST_ID)
    }

    pub fn with_id(method: &str, params: Vec<Value>, id: u64) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            method: format!("{}.{}", NAMESPACE, method),
            params,
            id,
        }
    }
}

/// Incoming reply object
///
/// Every field is optional on the wire; `id` is often missing on error replies.
/// `jsonrpc` is carried as-is and never checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ResponseEnvelope {
    /// Decode a parsed JSON body; anything but an object is rejected
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "expected a JSON-RPC response object",
            ));
        }
        serde_json::from_value(value)
    }

    /// `error` takes precedence over `result` when it is truthy
    pub fn has_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }

    /// Consume the envelope, returning `result` (`null` when absent)
    pub fn into_result(self) -> Value {
        self.result.unwrap_or(Value::Null)
    }

    /// Inspect the reply: an `error` turns into [`RpcError`], otherwise the
    /// envelope is handed back untouched
    pub fn check_error(self) -> Result<Self, RpcError> {
        if let Some(error) = self.error.as_ref().filter(|e| is_truthy(e)) {
            return Err(rpc_error_from(error));
        }
        Ok(self)
    }
}

fn rpc_error_from(error: &Value) -> RpcError {
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_RPC_ERROR);

    RpcError {
        code: error.get("code").and_then(Value::as_i64),
        message: message.to_string(),
        data: error.get("data").cloned(),
    }
}
