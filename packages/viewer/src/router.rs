//! Assembles the Axum [`Router`] from the handler modules.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    bridge::SchemaBridge,
    bus::MessageBus,
    config::ViewerConfig,
    handlers::{schema, viewer, AppState},
};

/// Build the complete application router with shared state.
pub fn build_router(bus: Arc<dyn MessageBus>, config: ViewerConfig) -> Router {
    let bridge = SchemaBridge::new(bus, &config.root_path, config.request_timeout);
    let state = AppState { bridge };

    Router::new()
        .route("/asyncapi.json", get(schema::asyncapi_json))
        .route("/", get(viewer::page))
        // Any other path gets the viewer page too.
        .fallback(viewer::page)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
