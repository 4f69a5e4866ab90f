//! Seam to the presence-broadcasting SDK.
//!
//! The reporter hands activity payloads to a `PresenceSink`; the
//! channel-backed `PresenceClient` forwards them to a pluggable
//! transport on a dedicated single-worker runtime and surfaces
//! connection events for the embedder to announce.

pub mod client;
pub mod protocol;
pub mod types;

pub use client::{LogTransport, PresenceClient, PresenceSink, PresenceTransport};
pub use protocol::ActivityPayload;
pub use types::{PresenceClientConfig, PresenceEvent};
