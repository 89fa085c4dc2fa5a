//! In-memory implementation of [`MessageBus`].
//!
//! Replies are scripted per subject with [`Responder`] values, and every
//! request is recorded so tests can assert on the subjects and payloads the
//! bridge produced. Subjects with no scripted responder behave like a NATS
//! subject nobody subscribes to.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use bytes::Bytes;

use super::{BusError, MessageBus};

/// How [`MemoryBus`] answers requests on one subject.
#[derive(Debug, Clone)]
pub enum Responder {
    /// Reply with these bytes.
    Reply(Bytes),
    /// Never reply. The request stays pending until the caller gives up.
    Silent,
    /// Fail with this error.
    Fail(BusError),
}

impl Responder {
    /// Reply with the JSON serialization of `value`.
    pub fn json(value: &serde_json::Value) -> Self {
        Responder::Reply(Bytes::from(value.to_string()))
    }
}

/// A request observed by [`MemoryBus`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub subject: String,
    pub payload: Bytes,
}

/// Thread-safe, scripted implementation of [`MessageBus`].
#[derive(Default)]
pub struct MemoryBus {
    responders: RwLock<HashMap<String, Responder>>,
    log: Mutex<Vec<RecordedRequest>>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the responder for `subject`.
    pub fn respond(&self, subject: impl Into<String>, responder: Responder) {
        self.responders
            .write()
            .unwrap()
            .insert(subject.into(), responder);
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageBus for MemoryBus {
    async fn request(&self, subject: &str, payload: Bytes) -> Result<Bytes, BusError> {
        self.log.lock().unwrap().push(RecordedRequest {
            subject: subject.to_string(),
            payload,
        });

        let responder = self.responders.read().unwrap().get(subject).cloned();
        match responder {
            Some(Responder::Reply(bytes)) => Ok(bytes),
            Some(Responder::Fail(e)) => Err(e),
            Some(Responder::Silent) => std::future::pending().await,
            None => Err(BusError::NoResponders),
        }
    }
}
