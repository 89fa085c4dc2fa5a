//! The error document served by `GET /asyncapi.json` when no schema could be
//! retrieved.
//!
//! It is a minimal but complete AsyncAPI document so that a schema-aware
//! renderer displays the failure instead of choking on the body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version marker written into every error document.
pub const ASYNCAPI_VERSION: &str = "2.0";

/// The `info` block of an AsyncAPI document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Info {
    pub title: String,

    /// Rendered as HTML by the viewer.
    pub description: String,
}

/// A synthetic AsyncAPI document describing a retrieval failure.
///
/// ```json
/// {
///   "asyncapi": "2.0",
///   "info": { "title": "ERROR", "description": "<p style='color: red'>...</p>" },
///   "channels": {}
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDocument {
    pub asyncapi: String,
    pub info: Info,
    pub channels: Map<String, Value>,
}

impl ErrorDocument {
    /// Title shown by the renderer for every failure.
    pub const TITLE: &'static str = "ERROR";

    /// Build an error document with the given HTML description and no channels.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            asyncapi: ASYNCAPI_VERSION.into(),
            info: Info {
                title: Self::TITLE.into(),
                description: description.into(),
            },
            channels: Map::new(),
        }
    }
}
