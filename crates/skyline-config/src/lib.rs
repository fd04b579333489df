//! Skyline engine configuration.
//!
//! TOML-based configuration with validation. Every section has defaults,
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use skyline_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{EngineConfig, CONFIG_SCHEMA_VERSION};

use skyline_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EngineConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&EngineConfig::default());
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"editor\""));
        assert!(json.contains("\"run\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyline.toml");
        std::fs::write(&path, "[display]\nheight = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&EngineConfig::default());
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.display.width, 800);
        assert_eq!(parsed.logging.level, schema::LogLevel::Info);
    }
}
