//! Config validation.
//!
//! Checks numeric ranges and collects every problem into a single
//! `ConfigError` instead of stopping at the first one.

#[cfg(test)]
mod tests;

use crate::schema::EngineConfig;
use skyline_common::ConfigError;
use std::fmt::Display;

/// Largest texture dimension any supported backend can target.
const MAX_DISPLAY_DIMENSION: u32 = 16384;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    check_range(
        &mut errors,
        "display.width",
        config.display.width,
        1,
        MAX_DISPLAY_DIMENSION,
    );
    check_range(
        &mut errors,
        "display.height",
        config.display.height,
        1,
        MAX_DISPLAY_DIMENSION,
    );
    check_range(&mut errors, "run.frames", config.run.frames, 1, 100_000);
    check_range(&mut errors, "run.frame_time", config.run.frame_time, 0.0, 1.0);
    check_range(
        &mut errors,
        "run.camera_speed",
        config.run.camera_speed,
        -10_000.0,
        10_000.0,
    );

    if config.editor.worldmap_mode && !config.editor.active {
        errors.push("editor.worldmap_mode requires editor.active".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Record `name` as an error unless `min <= value <= max`. NaN never passes.
fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
