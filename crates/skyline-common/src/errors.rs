use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("level parse error: {0}")]
    ParseError(String),

    #[error("invalid value for '{key}': {reason}")]
    InvalidField { key: String, reason: String },

    #[error("level write error: {0}")]
    WriteError(String),
}

impl LevelError {
    pub fn invalid_field(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("unknown object class: {0}")]
    UnknownClass(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SkylineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Level(#[from] LevelError),

    #[error(transparent)]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("display.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: display.width = 0");
    }

    #[test]
    fn level_error_display() {
        let err = LevelError::invalid_field("top_color", "expected 3 or 4 components, got 2");
        assert_eq!(
            err.to_string(),
            "invalid value for 'top_color': expected 3 or 4 components, got 2"
        );

        let err = LevelError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "level parse error: unexpected token");
    }

    #[test]
    fn skyline_error_from_level() {
        let level_err = LevelError::WriteError("disk full".into());
        let err: SkylineError = level_err.into();
        assert!(matches!(err, SkylineError::Level(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn skyline_error_from_object() {
        let err: SkylineError = ObjectError::UnknownClass("spotlight".into()).into();
        assert!(matches!(err, SkylineError::Object(_)));
        assert_eq!(err.to_string(), "unknown object class: spotlight");
    }

    #[test]
    fn skyline_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SkylineError = io_err.into();
        assert!(matches!(err, SkylineError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
