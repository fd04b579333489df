//! Engine configuration schema.
//!
//! Every section derives `Default` and uses `#[serde(default)]`, so a
//! partial `skyline.toml` (or an empty one) yields a usable config.

mod display;
mod editor;
mod run;
mod system;

pub use display::DisplayConfig;
pub use editor::EditorConfig;
pub use run::RunConfig;
pub use system::{LogLevel, LoggingConfig};

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the engine binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub display: DisplayConfig,
    pub editor: EditorConfig,
    pub run: RunConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.height, 600);
        assert!(!config.editor.active);
        assert!(!config.editor.worldmap_mode);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: EngineConfig = toml::from_str(
            r#"
[display]
width = 1280

[editor]
worldmap_mode = true
"#,
        )
        .unwrap();
        assert_eq!(config.display.width, 1280);
        assert_eq!(config.display.height, 600);
        assert!(config.editor.worldmap_mode);
        assert!(!config.editor.active);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: EngineConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let result: Result<EngineConfig, _> = toml::from_str("[logging]\nlevel = \"loud\"\n");
        assert!(result.is_err());
    }
}
