//! NATS implementation of [`MessageBus`] backed by `async-nats`.

use async_nats::{ConnectOptions, RequestError, RequestErrorKind};
use async_trait::async_trait;
use bytes::Bytes;

use super::{BusError, MessageBus};

/// A live NATS connection.
///
/// `async_nats::Client` is cheaply clonable and multiplexes concurrent
/// requests over one connection, so a single `NatsBus` serves every request.
#[derive(Clone)]
pub struct NatsBus {
    client: async_nats::Client,
}

impl NatsBus {
    /// Connect to the NATS server at `url` (e.g. `nats://127.0.0.1:4222`).
    ///
    /// Fails immediately if the server cannot be reached. The client's own
    /// request timeout is disabled; the bridge applies its own deadline.
    pub async fn connect(url: &str) -> Result<Self, async_nats::ConnectError> {
        let client = ConnectOptions::new()
            .request_timeout(None)
            .connect(url)
            .await?;
        Ok(Self { client })
    }
}

#[async_trait]
impl MessageBus for NatsBus {
    async fn request(&self, subject: &str, payload: Bytes) -> Result<Bytes, BusError> {
        let message = self
            .client
            .request(subject.to_string(), payload)
            .await
            .map_err(|e| map_request_error(&e))?;
        Ok(message.payload)
    }
}

/// Translate a failed `async-nats` request into a [`BusError`].
fn map_request_error(e: &RequestError) -> BusError {
    match e.kind() {
        RequestErrorKind::NoResponders => BusError::NoResponders,
        _ => BusError::Transport(e.to_string()),
    }
}
