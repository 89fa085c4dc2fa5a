//! Schema retrieval over the message bus.
//!
//! [`SchemaBridge`] turns one HTTP request into exactly one bus request to
//! `<root>.schema.RETRIEVE`, bounded by the configured deadline, and
//! classifies what came back as an [`Outcome`]. It never fails: every
//! transport or payload problem becomes an outcome variant that the
//! composer can render.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use asyncapi_schema_api::{RpcError, RpcReply, RpcRequest};
use bytes::Bytes;
use tracing::{debug, warn};

use crate::bus::{BusError, MessageBus};

/// Suffix appended to the root path to address the schema endpoint.
pub const SCHEMA_SUFFIX: &str = ".schema.RETRIEVE";

// ---------------------------------------------------------------------------
// SchemaAddress
// ---------------------------------------------------------------------------

/// The bus subject a service answers schema requests on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaAddress(String);

impl SchemaAddress {
    pub fn for_root(root_path: &str) -> Self {
        Self(format!("{root_path}{SCHEMA_SUFFIX}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of one schema fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The request itself failed: no responders, deadline passed, or the
    /// connection broke. Holds the transport's diagnostic text.
    TransportError(String),

    /// A reply arrived but held no usable `result`, or was not a JSON object.
    /// `remote_error` is set when the service answered with a JSON-RPC error.
    SchemaMissing { remote_error: Option<RpcError> },

    /// The serialized `result`, passed through untouched.
    SchemaOk(Bytes),
}

impl Outcome {
    /// Classify the raw bytes of a reply.
    pub fn from_reply(raw: &[u8]) -> Self {
        let reply = match RpcReply::from_slice(raw) {
            Ok(reply) => reply,
            Err(_) => return Outcome::SchemaMissing { remote_error: None },
        };
        let Some(result) = reply.result.as_ref() else {
            return Outcome::SchemaMissing {
                remote_error: reply.rpc_error(),
            };
        };
        match serde_json::to_vec(result) {
            Ok(body) => Outcome::SchemaOk(Bytes::from(body)),
            Err(_) => Outcome::SchemaMissing { remote_error: None },
        }
    }
}

// ---------------------------------------------------------------------------
// SchemaBridge
// ---------------------------------------------------------------------------

/// Fetches a service's schema over a [`MessageBus`].
///
/// Cheap to clone; all state is immutable after construction.
#[derive(Clone)]
pub struct SchemaBridge {
    bus: Arc<dyn MessageBus>,
    address: SchemaAddress,
    timeout: Duration,
}

impl SchemaBridge {
    pub fn new(bus: Arc<dyn MessageBus>, root_path: &str, timeout: Duration) -> Self {
        Self {
            bus,
            address: SchemaAddress::for_root(root_path),
            timeout,
        }
    }

    /// The subject every fetch is sent to.
    pub fn address(&self) -> &SchemaAddress {
        &self.address
    }

    /// Issue one schema request and classify the reply.
    pub async fn fetch_schema(&self) -> Outcome {
        let request = RpcRequest::empty();
        let payload = match serde_json::to_vec(&request) {
            Ok(p) => Bytes::from(p),
            Err(e) => return Outcome::TransportError(e.to_string()),
        };

        let call = self.bus.request(self.address.as_str(), payload);
        let reply = tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(BusError::Timeout(self.timeout)));

        let outcome = match reply {
            Ok(raw) => Outcome::from_reply(&raw),
            Err(e) => Outcome::TransportError(e.to_string()),
        };

        match &outcome {
            Outcome::TransportError(msg) => {
                warn!(subject = %self.address, "schema request failed: {msg}");
            }
            Outcome::SchemaMissing { remote_error } => match remote_error {
                Some(err) => warn!(
                    subject = %self.address,
                    code = err.code,
                    "service returned an error instead of a schema: {}",
                    err.message
                ),
                None => warn!(subject = %self.address, "reply carried no usable schema"),
            },
            Outcome::SchemaOk(body) => {
                debug!(subject = %self.address, bytes = body.len(), "schema retrieved");
            }
        }

        outcome
    }
}
