//! Wire types for the AsyncAPI viewer.
//!
//! This crate encodes both sides of the viewer's contracts as Rust types:
//! the JSON-RPC envelope sent over the message bus to a service's
//! `schema.RETRIEVE` subject, the reply that comes back, and the error
//! document served in place of a schema when retrieval fails.
//!
//! # Contracts covered
//!
//! | Direction | Channel | Type |
//! |-----------|---------|------|
//! | outbound | `<root>.schema.RETRIEVE` | [`RpcRequest`] |
//! | inbound | bus reply | [`RpcReply`] / [`RpcError`] |
//! | outbound | `GET /asyncapi.json` (failure) | [`ErrorDocument`] |

pub mod document;
pub mod rpc;

pub use document::{ErrorDocument, Info, ASYNCAPI_VERSION};
pub use rpc::{RpcError, RpcReply, RpcRequest, JSON_RPC_VERSION};
