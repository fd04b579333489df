pub mod errors;
pub mod types;

pub use errors::{ConfigError, LevelError, ObjectError, SkylineError};
pub use types::{Color, GradientDirection, Rectf, ScreenSize, Vector, LAYER_BACKGROUND0};

pub type Result<T> = std::result::Result<T, SkylineError>;
