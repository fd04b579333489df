//! Script-facing handle for a gradient.
//!
//! Scripts speak in strings and plain RGB triples. Unlike level files,
//! an unknown direction name from a script is rejected and logged.

use skyline_common::{Color, GradientDirection};
use tracing::warn;

use crate::gradient::Gradient;

pub struct GradientScript<'a> {
    gradient: &'a mut Gradient,
}

impl<'a> GradientScript<'a> {
    pub fn new(gradient: &'a mut Gradient) -> Self {
        Self { gradient }
    }

    /// Leaves the direction unchanged when `direction` is not a known name.
    pub fn set_direction(&mut self, direction: &str) {
        match direction.parse::<GradientDirection>() {
            Ok(dir) => self.gradient.set_direction(dir),
            Err(e) => warn!(direction, "{e}"),
        }
    }

    pub fn get_direction(&self) -> &'static str {
        self.gradient.direction().as_str()
    }

    /// Top (or left) color, opaque.
    pub fn set_color1(&mut self, red: f32, green: f32, blue: f32) {
        let bottom = self.gradient.bottom_color();
        self.gradient.set_gradient(Color::rgb(red, green, blue), bottom);
    }

    /// Bottom (or right) color, opaque.
    pub fn set_color2(&mut self, red: f32, green: f32, blue: f32) {
        let top = self.gradient.top_color();
        self.gradient.set_gradient(top, Color::rgb(red, green, blue));
    }

    pub fn get_color1(&self) -> Color {
        self.gradient.top_color()
    }

    pub fn get_color2(&self) -> Color {
        self.gradient.bottom_color()
    }

    pub fn swap_colors(&mut self) {
        let (top, bottom) = (self.gradient.top_color(), self.gradient.bottom_color());
        self.gradient.set_gradient(bottom, top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LogCapture;
    use skyline_common::ScreenSize;

    fn gradient() -> Gradient {
        Gradient::new(ScreenSize::new(800.0, 600.0))
    }

    #[test]
    fn set_direction_accepts_level_names() {
        let mut g = gradient();
        let mut script = GradientScript::new(&mut g);
        script.set_direction("horizontal_sector");
        assert_eq!(script.get_direction(), "horizontal_sector");
        script.set_direction("vertical");
        assert_eq!(script.get_direction(), "vertical");
    }

    #[test]
    fn unknown_direction_is_rejected_with_warning() {
        let logs = LogCapture::default();
        let mut g = gradient();
        g.set_direction(GradientDirection::Horizontal);
        logs.run(|| GradientScript::new(&mut g).set_direction("sideways"));
        assert_eq!(g.direction(), GradientDirection::Horizontal);
        assert_eq!(logs.warnings().len(), 1, "{}", logs.contents());
    }

    #[test]
    fn colors_are_set_opaque_and_swapped() {
        let mut g = gradient();
        let mut script = GradientScript::new(&mut g);
        script.set_color1(1.0, 0.0, 0.0);
        script.set_color2(0.0, 0.0, 1.0);
        script.swap_colors();
        assert_eq!(script.get_color1(), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(script.get_color2(), Color::rgb(1.0, 0.0, 0.0));
    }
}
