//! Background color gradient.
//!
//! Fills either the screen or the whole sector with a blend between two
//! colors. Vertical gradients blend top to bottom, horizontal ones left to
//! right; both reuse the same pair of color fields.

mod parse;


use std::any::Any;

use skyline_common::{
    Color, GradientDirection, LevelError, ObjectError, Rectf, ScreenSize, Vector,
    LAYER_BACKGROUND0,
};
use skyline_level::{reader_get_layer, ReaderMapping, Writer};
use skyline_renderer::DrawingContext;
use tracing::warn;

use crate::game_object::{
    apply_base_option, base_settings, save_base, EditorContext, GameObject, Viewport,
};
use crate::settings::{ObjectOption, ObjectSettings, OptionValue};

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    name: String,
    layer: i32,
    gradient_top: Color,
    gradient_bottom: Color,
    gradient_direction: GradientDirection,
    gradient_region: Rectf,
}

impl Gradient {
    pub const CLASS_NAME: &'static str = "gradient";

    /// Editor-created gradient: vertical, full screen, both colors zeroed.
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            name: String::new(),
            layer: LAYER_BACKGROUND0,
            gradient_top: Color::default(),
            gradient_bottom: Color::default(),
            gradient_direction: GradientDirection::Vertical,
            gradient_region: Rectf::from_size(screen),
        }
    }

    /// Build a gradient from its level file mapping.
    ///
    /// Missing keys take defaults. Fails only when a present key holds a
    /// value of the wrong shape.
    pub fn from_mapping(reader: &ReaderMapping, screen: ScreenSize) -> Result<Self, LevelError> {
        let layer = reader_get_layer(reader, LAYER_BACKGROUND0)?;
        let name = reader.get_or("name", String::new())?;
        let direction = parse::parse_direction(reader)?;
        let [(top_key, top), (bottom_key, bottom)] = parse::parse_colors(reader, direction)?;

        warn_out_of_range(top, top_key);
        warn_out_of_range(bottom, bottom_key);

        Ok(Self {
            name,
            layer,
            gradient_top: top,
            gradient_bottom: bottom,
            gradient_direction: direction,
            gradient_region: Rectf::from_size(screen),
        })
    }

    /// Replace both colors. Channels above 1.0 are kept but logged.
    pub fn set_gradient(&mut self, top: Color, bottom: Color) {
        self.gradient_top = top;
        self.gradient_bottom = bottom;

        let (top_key, bottom_key) = self.color_keys();
        warn_out_of_range(top, top_key);
        warn_out_of_range(bottom, bottom_key);
    }

    /// Takes effect on the region at the next draw or resize.
    pub fn set_direction(&mut self, direction: GradientDirection) {
        self.gradient_direction = direction;
    }

    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn top_color(&self) -> Color {
        self.gradient_top
    }

    pub fn bottom_color(&self) -> Color {
        self.gradient_bottom
    }

    pub fn direction(&self) -> GradientDirection {
        self.gradient_direction
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn region(&self) -> Rectf {
        self.gradient_region
    }

    /// Level file keys for the color pair under the current direction.
    fn color_keys(&self) -> (&'static str, &'static str) {
        if self.gradient_direction.is_horizontal() {
            ("left_color", "right_color")
        } else {
            ("top_color", "bottom_color")
        }
    }
}

impl GameObject for Gradient {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, _dt_sec: f32) {}

    fn draw(&mut self, context: &mut dyn DrawingContext, viewport: &dyn Viewport) {
        match self.gradient_direction {
            GradientDirection::VerticalSector | GradientDirection::HorizontalSector => {
                let camera = viewport.camera_translation();
                self.gradient_region =
                    Rectf::new(-camera.x, -camera.y, viewport.width(), viewport.height());
            }
            GradientDirection::Vertical | GradientDirection::Horizontal => {}
        }

        context.push_transform();
        context.set_translation(Vector::ZERO);
        context.draw_gradient(
            self.gradient_top,
            self.gradient_bottom,
            self.layer,
            self.gradient_direction,
            self.gradient_region,
        );
        context.pop_transform();
    }

    fn save(&self, writer: &mut Writer) {
        save_base(&self.name, writer);
        writer.write_int("layer", i64::from(self.layer));

        match self.gradient_direction {
            GradientDirection::Vertical => {}
            dir @ (GradientDirection::Horizontal
            | GradientDirection::VerticalSector
            | GradientDirection::HorizontalSector) => {
                writer.write_string("direction", dir.as_str());
            }
        }

        let (first, second) = self.color_keys();
        writer.write_color(first, self.gradient_top);
        writer.write_color(second, self.gradient_bottom);
    }

    fn settings(&self) -> ObjectSettings {
        let mut result = base_settings("Gradient", &self.name);

        let (top_label, bottom_label) = if self.gradient_direction.is_horizontal() {
            ("Left Colour", "Right Colour")
        } else {
            ("Top Colour", "Bottom Colour")
        };
        result.push(ObjectOption::color(top_label, "top_color", self.gradient_top));
        result.push(ObjectOption::color(
            bottom_label,
            "bottom_color",
            self.gradient_bottom,
        ));

        result.push(ObjectOption::int("Z-pos", "layer", self.layer));
        result.push(ObjectOption::select(
            "Direction",
            "direction",
            self.gradient_direction.index(),
            GradientDirection::ALL.iter().map(|d| d.label()).collect(),
        ));

        result.push(ObjectOption::remove());
        result
    }

    fn apply_option(&mut self, key: &str, value: OptionValue) -> Result<(), ObjectError> {
        match (key, value) {
            ("name", value) => apply_base_option(&mut self.name, value),
            ("top_color", OptionValue::Color(color)) => {
                self.set_gradient(color, self.gradient_bottom);
                Ok(())
            }
            ("bottom_color", OptionValue::Color(color)) => {
                self.set_gradient(self.gradient_top, color);
                Ok(())
            }
            ("layer", OptionValue::Int(layer)) => {
                self.set_layer(layer);
                Ok(())
            }
            ("direction", OptionValue::Select(index)) => {
                let direction =
                    GradientDirection::from_index(index).ok_or_else(|| ObjectError::InvalidOption {
                        key: key.into(),
                        reason: format!("no direction at index {index}"),
                    })?;
                self.set_direction(direction);
                Ok(())
            }
            ("top_color" | "bottom_color", other) => Err(other.mismatch(key, "color")),
            ("layer", other) => Err(other.mismatch(key, "integer")),
            ("direction", other) => Err(other.mismatch(key, "selection")),
            _ => Err(ObjectError::InvalidOption {
                key: key.into(),
                reason: "gradients have no such option".into(),
            }),
        }
    }

    fn on_window_resize(&mut self, size: ScreenSize) {
        self.gradient_region = Rectf::from_size(size);
    }

    fn do_save(&self, editor: &EditorContext) -> bool {
        !editor.in_worldmap_mode()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn warn_out_of_range(color: Color, key: &'static str) {
    if color.exceeds_unit_range() {
        warn!(key, "gradient {key} has values above 1.0");
    }
}
