//! Configuration schema types for scopelink.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the reference
//! plugin build.

mod logging;
mod presence;
mod reporter;

pub use logging::*;
pub use presence::*;
pub use reporter::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for scopelink.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScopelinkConfig {
    pub presence: PresenceSettings,
    pub reporter: ReporterConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_presence() {
        let config = ScopelinkConfig::default();
        assert!(config.presence.enabled);
        assert!(config.presence.client_id.is_empty());
        assert_eq!(config.presence.queue_depth, 64);
    }

    #[test]
    fn default_config_has_correct_reporter() {
        let config = ScopelinkConfig::default();
        assert_eq!(config.reporter.tick_interval_ms, 1000);
        assert_eq!(config.reporter.snapshot_every, 5);
        assert_eq!(config.reporter.caption_every, 15);
        assert_eq!(config.reporter.tier_threshold_secs, 7200);
        assert_eq!(config.reporter.onfire_threshold, 10);
        assert!(!config.reporter.idle_captions.is_empty());
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = ScopelinkConfig::default();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r#"
[reporter]
onfire_threshold = 15

[presence]
client_id = "1234567890"
"#;
        let config: ScopelinkConfig = toml::from_str(toml_str).unwrap();
        // Overridden values
        assert_eq!(config.reporter.onfire_threshold, 15);
        assert_eq!(config.presence.client_id, "1234567890");
        // Defaults preserved
        assert_eq!(config.reporter.tick_interval_ms, 1000);
        assert_eq!(config.reporter.tier_threshold_secs, 7200);
        assert!(config.presence.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: ScopelinkConfig = toml::from_str("").unwrap();
        let default = ScopelinkConfig::default();
        assert_eq!(config.reporter.snapshot_every, default.reporter.snapshot_every);
        assert_eq!(config.reporter.caption_every, default.reporter.caption_every);
        assert_eq!(config.presence.queue_depth, default.presence.queue_depth);
        assert_eq!(config.logging.level, default.logging.level);
    }

    #[test]
    fn custom_captions_in_toml() {
        let toml_str = r#"
[reporter]
idle_captions = ["On a break", "Scanning the skies"]
"#;
        let config: ScopelinkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reporter.idle_captions.len(), 2);
        assert_eq!(config.reporter.idle_captions[0], "On a break");
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = ScopelinkConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ScopelinkConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            deserialized.reporter.idle_captions,
            config.reporter.idle_captions
        );
        assert_eq!(deserialized.presence.queue_depth, config.presence.queue_depth);
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
