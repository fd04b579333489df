//! Sector camera.

use skyline_common::Vector;

/// Scroll position of a sector. The translation is the world position of
/// the screen's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    translation: Vector,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translation(&self) -> Vector {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vector) {
        self.translation = translation;
    }

    pub fn scroll_by(&mut self, delta: Vector) {
        self.translation = self.translation + delta;
    }
}
