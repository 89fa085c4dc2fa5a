//! Shared helpers for the AsyncAPI viewer conformance suite.
//!
//! Provides [`spawn_viewer`], which binds a `TcpListener` on an ephemeral
//! port, wires up an in-process viewer backed by a [`MemoryBus`], and returns
//! both the local URL and the bus so tests can script replies and inspect
//! the requests the viewer sent.

use std::sync::Arc;
use std::time::Duration;

use asyncapi_viewer::{build_router, MemoryBus, MessageBus, ViewerConfig};

/// Root path every spawned viewer is configured with.
pub const ROOT_PATH: &str = "conformance.service";

/// Subject the spawned viewer sends schema requests to.
pub const SCHEMA_SUBJECT: &str = "conformance.service.schema.RETRIEVE";

/// Start an ephemeral in-process viewer and return `(base_url, bus)`.
///
/// The viewer runs in a background `tokio` task bound to an OS-assigned port
/// on `127.0.0.1`, with the default 500 ms request deadline.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the server fails.
pub async fn spawn_viewer() -> (String, Arc<MemoryBus>) {
    spawn_viewer_with_timeout(Duration::from_millis(500)).await
}

/// Like [`spawn_viewer`] but with a custom request deadline.
pub async fn spawn_viewer_with_timeout(timeout: Duration) -> (String, Arc<MemoryBus>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let bus = Arc::new(MemoryBus::new());
    let config = ViewerConfig {
        bind_addr: addr,
        request_timeout: timeout,
        ..ViewerConfig::new(ROOT_PATH)
    };
    let router = build_router(Arc::clone(&bus) as Arc<dyn MessageBus>, config);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance viewer error");
    });

    (base_url, bus)
}
