//! `render-asyncapi` — serves a NATS service's AsyncAPI schema in the browser.
//!
//! # Quick start
//!
//! ```sh
//! # Service listening on master.service-staging.*, NATS on 4222:
//! render-asyncapi 4222 master.service-staging
//!
//! # Then open http://localhost:8090
//! ```
//!
//! # Options
//!
//! See [`asyncapi_viewer::Cli`] for flags and environment variables.

use std::sync::Arc;

use asyncapi_viewer::{
    bridge::SchemaAddress, build_router, error::StartupError, Cli, MessageBus, NatsBus,
    ViewerConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Parse before anything else: bad arguments exit here, before any
    // connection or listener exists.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asyncapi_viewer=info,tower_http=debug".into()),
        )
        .init();

    if let Err(e) = run(ViewerConfig::from(cli)).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(config: ViewerConfig) -> Result<(), StartupError> {
    let bus: Arc<dyn MessageBus> = Arc::new(
        NatsBus::connect(&config.nats_url)
            .await
            .map_err(|source| StartupError::Connect {
                url: config.nats_url.clone(),
                source,
            })?,
    );
    tracing::info!("connected to NATS at {}", config.nats_url);
    tracing::info!(
        "schema subject: {}",
        SchemaAddress::for_root(&config.root_path)
    );

    let bind_addr = config.bind_addr;
    let app = build_router(bus, config);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: bind_addr,
            source,
        })?;
    tracing::info!("docs available on http://{bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
