//! Config path resolution and default file creation.

use skyline_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// `<config dir>/skyline/skyline.toml` for the current platform.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("skyline").join("skyline.toml"))
}

/// Write the commented default config to `path`, atomically.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, default_config_toml())
        .and_then(|()| std::fs::rename(&tmp_path, path))
        .map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to write default config to {}: {e}",
                path.display()
            ))
        })?;

    info!("created default config at {}", path.display());
    Ok(())
}
