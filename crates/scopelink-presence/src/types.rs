//! Configuration and event types for the presence client.

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the presence client.
#[derive(Debug, Clone)]
pub struct PresenceClientConfig {
    /// Application id registered with the broadcasting service.
    pub client_id: String,
    /// Depth of the update queue; overflow drops that tick's update.
    pub queue_depth: usize,
}

impl Default for PresenceClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            queue_depth: 64,
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Events emitted by the presence client for the embedder to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenceEvent {
    Connected,
    Disconnected,
    Error(String),
}
