//! Configuration validation.
//!
//! Collects every complaint instead of stopping at the first one. The
//! loader logs the result as a warning and keeps the parsed values; strict
//! callers can invoke [`validate`] themselves and treat it as fatal.

use oriel_common::ConfigError;

use crate::schema::BridgeConfig;

/// Upper bound for second-denominated knobs. Anything above a day is
/// almost certainly a unit mistake.
const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Smallest response buffer that can hold any text at all: one byte plus
/// the terminator.
const MIN_BUFFER_CAPACITY: usize = 2;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_timeouts(&mut errors, config);
    validate_script_buffer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_timeouts(errors: &mut Vec<String>, config: &BridgeConfig) {
    if config.startup_timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(format!(
            "startup_timeout_secs = {} is out of range [0, {MAX_TIMEOUT_SECS}]",
            config.startup_timeout_secs
        ));
    }
    if config.script.timeout_secs > MAX_TIMEOUT_SECS {
        errors.push(format!(
            "script.timeout_secs = {} is out of range [0, {MAX_TIMEOUT_SECS}]",
            config.script.timeout_secs
        ));
    }
}

fn validate_script_buffer(errors: &mut Vec<String>, config: &BridgeConfig) {
    let cap = config.script.buffer_capacity;
    if cap != 0 && cap < MIN_BUFFER_CAPACITY {
        errors.push(format!(
            "script.buffer_capacity = {cap} cannot hold a terminated response (use 0 for the default)"
        ));
    }
}
