//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::PlacerConfig;
use std::path::Path;

/// Loads and validates a `strata.toml` from the given path.
pub fn load_config(path: &Path) -> Result<PlacerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `strata.toml` from a string.
pub fn load_config_from_str(content: &str) -> Result<PlacerConfig, ConfigError> {
    let config: PlacerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks value ranges that the annealing and packing loops rely on.
pub fn validate_config(config: &PlacerConfig) -> Result<(), ConfigError> {
    let invalid = |msg: &str| -> Result<(), ConfigError> {
        Err(ConfigError::ValidationError(msg.to_string()))
    };

    let surface = &config.surface;
    if !(surface.utilization > 0.0 && surface.utilization <= 1.0) {
        return invalid("surface.utilization must be in (0, 1]");
    }
    if surface.rows == Some(0) {
        return invalid("surface.rows must be at least 1");
    }

    let initial = &config.initial;
    if initial.random_tries == 0 || initial.attempts_per_escalation == 0 {
        return invalid("initial.random_tries and initial.attempts_per_escalation must be positive");
    }
    if initial.capacity_increment == 0 {
        return invalid("initial.capacity_increment must be positive");
    }
    if initial.max_attempts == 0 {
        return invalid("initial.max_attempts must be positive");
    }

    let anneal = &config.anneal;
    if !(anneal.cooling_rate > 0.0 && anneal.cooling_rate < 1.0) {
        return invalid("anneal.cooling_rate must be in (0, 1)");
    }
    if !(anneal.init_accept_rate > 0.0 && anneal.init_accept_rate < 1.0) {
        return invalid("anneal.init_accept_rate must be in (0, 1)");
    }
    if anneal.freeze_temperature <= 0.0 {
        return invalid("anneal.freeze_temperature must be positive");
    }
    if anneal.max_temperature <= anneal.freeze_temperature {
        return invalid("anneal.max_temperature must exceed anneal.freeze_temperature");
    }
    if anneal.calibration_samples == 0 {
        return invalid("anneal.calibration_samples must be positive");
    }
    Ok(())
}
