//! HTTP request handlers for the viewer.
//!
//! - [`schema`] serves `GET /asyncapi.json`, the retrieved schema or an
//!   error document.
//! - [`viewer`] serves the static HTML page on `/` and every other path.

pub mod schema;
pub mod viewer;

use crate::bridge::SchemaBridge;

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
///
/// Everything in here is immutable after startup, so concurrent requests
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub bridge: SchemaBridge,
}
