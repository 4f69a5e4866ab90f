//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# scopelink Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[presence]
# enabled = true
# client_id = ""            # application id registered with the service
# queue_depth = 64          # 8-1024

[reporter]
# tick_interval_ms = 1000   # 50-10000
# snapshot_every = 5        # 1-60 ticks between host snapshots
# caption_every = 15        # 1-600 ticks between idle captions
# tier_threshold_secs = 7200  # 60-86400; Silver above this, Gold above twice
# onfire_threshold = 10     # 1-100 owned aircraft
# idle_captions = [
#     "Watching the scope",
#     "Listening out",
#     "Waiting for traffic",
#     "Radar contact",
# ]

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
