//! The trait every level object implements, and the context it runs in.

use std::any::Any;

use skyline_common::{ObjectError, ScreenSize, Vector};
use skyline_level::Writer;
use skyline_renderer::DrawingContext;

use crate::settings::{ObjectOption, ObjectSettings, OptionValue};

/// Camera and sector geometry an object may need while drawing.
pub trait Viewport {
    fn camera_translation(&self) -> Vector;
    fn width(&self) -> f32;
    fn height(&self) -> f32;
}

/// Editor state as seen by objects deciding whether to save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorContext {
    pub active: bool,
    pub worldmap_mode: bool,
}

impl EditorContext {
    /// No editor running: plain gameplay.
    pub const GAME: Self = Self {
        active: false,
        worldmap_mode: false,
    };

    pub fn new(active: bool, worldmap_mode: bool) -> Self {
        Self {
            active,
            worldmap_mode,
        }
    }

    pub fn in_worldmap_mode(&self) -> bool {
        self.active && self.worldmap_mode
    }
}

pub trait GameObject: Any {
    /// Level file class name, e.g. `"gradient"`.
    fn class_name(&self) -> &'static str;

    /// Display label; empty when unnamed.
    fn name(&self) -> &str;

    fn update(&mut self, dt_sec: f32);

    fn draw(&mut self, context: &mut dyn DrawingContext, viewport: &dyn Viewport);

    /// Write this object's fields. Called only when `do_save` agreed.
    fn save(&self, writer: &mut Writer);

    /// Build the editor option list. Never cached.
    fn settings(&self) -> ObjectSettings;

    /// Apply one editor edit.
    fn apply_option(&mut self, key: &str, value: OptionValue) -> Result<(), ObjectError>;

    fn on_window_resize(&mut self, _size: ScreenSize) {}

    fn do_save(&self, _editor: &EditorContext) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Fields every object writes before its own.
pub fn save_base(name: &str, writer: &mut Writer) {
    if !name.is_empty() {
        writer.write_string("name", name);
    }
}

/// Options every object starts with.
pub fn base_settings(class_label: &str, name: &str) -> ObjectSettings {
    let mut settings = ObjectSettings::new(class_label);
    settings.push(ObjectOption::text("Name", "name", name));
    settings
}

/// Handle the `name` edit shared by all objects.
pub fn apply_base_option(name: &mut String, value: OptionValue) -> Result<(), ObjectError> {
    match value {
        OptionValue::Text(text) => {
            *name = text;
            Ok(())
        }
        other => Err(other.mismatch("name", "text")),
    }
}
