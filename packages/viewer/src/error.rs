//! Fatal startup errors.
//!
//! Everything that can go wrong while serving a request is recovered into an
//! error document (see [`crate::compose`]). Only startup can fail.

/// An error that stops the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The NATS server could not be reached.
    #[error("failed to connect to NATS at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: async_nats::ConnectError,
    },

    /// The HTTP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
