//! Public surface for the `asyncapi-viewer` crate.
//!
//! Exposes the router builder, the bus seam and the config types so that
//! external crates (e.g. the conformance test suite) can run an in-process
//! viewer against a scripted bus without spawning a subprocess.

pub mod bridge;
pub mod bus;
pub mod compose;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use bridge::{Outcome, SchemaAddress, SchemaBridge};
pub use bus::{memory::MemoryBus, nats::NatsBus, BusError, MessageBus};
pub use config::{Cli, ViewerConfig};
pub use router::build_router;
