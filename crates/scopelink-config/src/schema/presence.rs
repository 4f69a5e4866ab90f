//! Presence sink configuration types.

use serde::{Deserialize, Serialize};

/// Presence broadcasting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceSettings {
    /// Master switch for the sink connection.
    pub enabled: bool,
    /// Application id registered with the broadcasting service.
    pub client_id: String,
    /// Depth of the update queue between the reporter and the client.
    pub queue_depth: u32,
}

impl Default for PresenceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            client_id: String::new(),
            queue_depth: 64,
        }
    }
}
