//! Headless frame loop settings.

use serde::{Deserialize, Serialize};

/// How many frames the binary simulates and how fast the camera scrolls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub frames: u32,
    /// Seconds per frame passed to `update`.
    pub frame_time: f64,
    /// Horizontal camera scroll per frame, in pixels.
    pub camera_speed: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 3,
            frame_time: 1.0 / 60.0,
            camera_speed: 32.0,
        }
    }
}
