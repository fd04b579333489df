//! Tests for config validation.

use super::*;

#[test]
fn default_config_validates() {
    let config = EngineConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_width() {
    let mut config = EngineConfig::default();
    config.display.width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.width"));
}

#[test]
fn catches_oversized_height() {
    let mut config = EngineConfig::default();
    config.display.height = 20_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.height"));
}

#[test]
fn catches_nan_frame_time() {
    let mut config = EngineConfig::default();
    config.run.frame_time = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("run.frame_time"));
}

#[test]
fn worldmap_mode_needs_active_editor() {
    let mut config = EngineConfig::default();
    config.editor.worldmap_mode = true;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("editor.worldmap_mode"));

    config.editor.active = true;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = EngineConfig::default();
    config.display.width = 0;
    config.run.frames = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("display.width"));
    assert!(err.contains("run.frames"));
    assert!(err.contains("; "));
}
