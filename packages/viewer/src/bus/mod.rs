//! Message-bus abstraction used by the schema bridge.
//!
//! The [`MessageBus`] trait is the whole contract the bridge needs from the
//! bus: publish a payload to a subject and wait for a single reply. The
//! connection lifecycle belongs to the implementation. Deadlines are applied
//! by the caller so that every implementation times out the same way.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`NatsBus`] | Production; a live NATS connection |
//! | [`MemoryBus`] | Tests and the conformance suite; scripted replies |
//!
//! [`NatsBus`]: nats::NatsBus
//! [`MemoryBus`]: memory::MemoryBus

pub mod memory;
pub mod nats;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

// ---------------------------------------------------------------------------
// BusError
// ---------------------------------------------------------------------------

/// Errors a request/reply exchange can end in.
///
/// The `Display` text is shown to the user inside the error document, so it
/// is written to be read by a person looking at the viewer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    /// Nothing is subscribed to the subject.
    #[error("no responders available for request")]
    NoResponders,

    /// No reply arrived before the deadline.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The connection or the client failed.
    #[error("{0}")]
    Transport(String),
}

// ---------------------------------------------------------------------------
// MessageBus trait
// ---------------------------------------------------------------------------

/// Request/reply capability of a message bus.
///
/// Implementations must be `Send + Sync + 'static` so they can be held in an
/// `Arc<dyn MessageBus>` and shared by concurrent requests.
#[async_trait]
pub trait MessageBus: Send + Sync + 'static {
    /// Publish `payload` to `subject` and return the body of the first reply.
    ///
    /// May wait indefinitely; callers bound it with a timeout.
    async fn request(&self, subject: &str, payload: Bytes) -> Result<Bytes, BusError>;
}
