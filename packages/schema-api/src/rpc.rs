//! JSON-RPC envelope exchanged with a service over the message bus.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol marker carried in every request envelope.
pub const JSON_RPC_VERSION: &str = "2.0";

/// The request published to `<root>.schema.RETRIEVE`.
///
/// ```json
/// { "jsonrpc": "2.0", "id": "0192f0c4-6b1e-7c3a-9d0e-3f4a5b6c7d8e", "params": {} }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcRequest {
    pub jsonrpc: String,

    /// Correlation identifier. Carries no meaning across calls.
    pub id: String,

    pub params: Map<String, Value>,
}

impl RpcRequest {
    /// A parameterless request with a freshly generated UUIDv7 `id`.
    pub fn empty() -> Self {
        Self::with_id(uuid::Uuid::now_v7().to_string())
    }

    /// A parameterless request with a caller-chosen `id`.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.into(),
            id: id.into(),
            params: Map::new(),
        }
    }
}

/// The error object a service returns instead of a `result`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A reply received from the bus.
///
/// Only `result` matters to the viewer, so every other member is kept as a
/// raw [`Value`]: a reply with an odd `jsonrpc`, `id` or `error` still yields
/// its `result`. A `null` result deserializes to `None`, the same as an
/// absent one. The reply must be a JSON object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RpcReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl RpcReply {
    /// Parse a reply body. Anything other than a JSON object is rejected;
    /// the derived impl alone would also accept an array positionally.
    pub fn from_slice(raw: &[u8]) -> Result<Self, serde_json::Error> {
        let members: Map<String, Value> = serde_json::from_slice(raw)?;
        serde_json::from_value(Value::Object(members))
    }

    /// The `error` member as an [`RpcError`], if it has that shape.
    pub fn rpc_error(&self) -> Option<RpcError> {
        self.error
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
