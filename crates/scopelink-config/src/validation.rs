//! Full configuration validation.
//!
//! Validates numeric ranges, the caption list, and the logging level,
//! collecting every violation into a single `ConfigError`.

use crate::schema::ScopelinkConfig;
use scopelink_common::ConfigError;

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u64, min: u64, max: u64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ScopelinkConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_presence(&mut errors, config);
    validate_reporter(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_presence(errors: &mut Vec<String>, config: &ScopelinkConfig) {
    validate_range(
        errors,
        "presence.queue_depth",
        config.presence.queue_depth as u64,
        8,
        1024,
    );
}

fn validate_reporter(errors: &mut Vec<String>, config: &ScopelinkConfig) {
    validate_range(
        errors,
        "reporter.tick_interval_ms",
        config.reporter.tick_interval_ms,
        50,
        10_000,
    );
    validate_range(
        errors,
        "reporter.snapshot_every",
        config.reporter.snapshot_every as u64,
        1,
        60,
    );
    validate_range(
        errors,
        "reporter.caption_every",
        config.reporter.caption_every as u64,
        1,
        600,
    );
    validate_range(
        errors,
        "reporter.tier_threshold_secs",
        config.reporter.tier_threshold_secs,
        60,
        86_400,
    );
    validate_range(
        errors,
        "reporter.onfire_threshold",
        config.reporter.onfire_threshold as u64,
        1,
        100,
    );
    if config.reporter.idle_captions.is_empty() {
        errors.push("reporter.idle_captions must not be empty".to_string());
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &ScopelinkConfig) {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = \"{}\" is not one of trace, debug, info, warn, error",
            config.logging.level
        ));
    }
}
