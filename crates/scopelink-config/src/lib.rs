//! scopelink configuration system.
//!
//! Provides TOML-based configuration for the presence reporter. All
//! sections use sensible defaults so partial configs work out of the
//! box; a commented template is written on first run.

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{LoggingConfig, PresenceSettings, ReporterConfig, ScopelinkConfig};
pub use toml_loader::{load_default, load_from_path};

use scopelink_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ScopelinkConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ScopelinkConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
