//! Reporter cadence and classification thresholds.

use serde::{Deserialize, Serialize};

/// Presence reporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Polling loop tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// Refresh the session snapshot every N ticks.
    pub snapshot_every: u32,
    /// Advance the idle caption every N ticks.
    pub caption_every: u32,
    /// Uptime needed for the Silver tier; twice this for Gold.
    pub tier_threshold_secs: u64,
    /// Owned-aircraft count at which the on-fire flag lights up.
    pub onfire_threshold: u32,
    /// Captions rotated through while idling.
    pub idle_captions: Vec<String>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            snapshot_every: 5,
            caption_every: 15,
            tier_threshold_secs: 7200,
            onfire_threshold: 10,
            idle_captions: vec![
                "Watching the scope".to_string(),
                "Listening out".to_string(),
                "Waiting for traffic".to_string(),
                "Radar contact".to_string(),
            ],
        }
    }
}
