//! Maps an [`Outcome`] to the body served by `GET /asyncapi.json`.
//!
//! A retrieved schema is served as-is. Both failure outcomes are rendered as
//! an [`ErrorDocument`], a minimal AsyncAPI document whose description shows
//! the problem in red, so the viewer always has something to draw. The
//! status is 200 in every case: the renderer refuses to draw anything for a
//! non-200 response, which would hide the error message.

use asyncapi_schema_api::ErrorDocument;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::json;

use crate::bridge::{Outcome, SchemaAddress};

/// The body of a schema response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseDocument {
    /// The service's own schema, unwrapped.
    Schema(Bytes),
    /// A synthetic document describing why no schema is shown.
    Error(ErrorDocument),
}

impl ResponseDocument {
    /// Serialize to the exact bytes written to the client.
    pub fn to_bytes(&self) -> Bytes {
        match self {
            ResponseDocument::Schema(body) => body.clone(),
            ResponseDocument::Error(doc) => {
                let body = json!({
                    "asyncapi": doc.asyncapi,
                    "info": {
                        "title": doc.info.title,
                        "description": doc.info.description,
                    },
                    "channels": doc.channels,
                });
                Bytes::from(body.to_string())
            }
        }
    }
}

impl IntoResponse for ResponseDocument {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.to_bytes(),
        )
            .into_response()
    }
}

/// Build the response body for `outcome`.
///
/// `address` is the subject the fetch was sent to and is quoted in every
/// error document so the user can spot a wrong root path.
pub fn compose(outcome: Outcome, address: &SchemaAddress) -> ResponseDocument {
    match outcome {
        Outcome::SchemaOk(body) => ResponseDocument::Schema(body),
        Outcome::TransportError(msg) => ResponseDocument::Error(ErrorDocument::new(format!(
            "{}{}",
            red(&escape_html(&msg)),
            red(&format!("Full subject: '{}'", escape_html(address.as_str()))),
        ))),
        Outcome::SchemaMissing { remote_error } => {
            let mut description = red(
                "Was able to get reply from NATS service, but not able to retrieve schema. \
                 Make sure you pass the correct root path as an argument.",
            );
            description.push_str(&red(&format!(
                "Your full path is: '{}'",
                escape_html(address.as_str())
            )));
            if let Some(err) = remote_error {
                description.push_str(&red(&format!(
                    "Service replied with error {}: {}",
                    err.code,
                    escape_html(&err.message)
                )));
            }
            ResponseDocument::Error(ErrorDocument::new(description))
        }
    }
}

fn red(text: &str) -> String {
    format!("<p style='color: red'>{text}</p>")
}

/// Escape text for interpolation into the HTML description.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
