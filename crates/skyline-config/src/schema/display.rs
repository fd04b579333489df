//! Display configuration types.

use serde::{Deserialize, Serialize};
use skyline_common::ScreenSize;

/// Logical screen size the engine renders at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl DisplayConfig {
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize::new(self.width as f32, self.height as f32)
    }
}
