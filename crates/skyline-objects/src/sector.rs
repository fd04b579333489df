//! A playable region: geometry, camera and the objects living in it.

use skyline_common::{ScreenSize, SkylineError, Vector};
use skyline_level::{LevelFile, SectorHeader, Writer};
use skyline_renderer::DrawingContext;
use tracing::{debug, warn};

use crate::camera::Camera;
use crate::factory::ObjectFactory;
use crate::game_object::{EditorContext, GameObject, Viewport};
use crate::gradient::Gradient;
use crate::scripting::GradientScript;

/// Snapshot of the sector geometry objects see while drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorView {
    pub camera: Vector,
    pub width: f32,
    pub height: f32,
}

impl Viewport for SectorView {
    fn camera_translation(&self) -> Vector {
        self.camera
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

pub struct Sector {
    name: String,
    width: f32,
    height: f32,
    camera: Camera,
    objects: Vec<Box<dyn GameObject>>,
}

impl Sector {
    pub fn new(header: &SectorHeader) -> Self {
        Self {
            name: header.name.clone(),
            width: header.width,
            height: header.height,
            camera: Camera::new(),
            objects: Vec::new(),
        }
    }

    /// Build a sector and its objects from a parsed level.
    ///
    /// Objects without a `class` key or with an unregistered class are
    /// skipped with a warning. Malformed fields of a known class fail the load.
    pub fn from_level(
        level: &LevelFile,
        factory: &ObjectFactory,
        screen: ScreenSize,
    ) -> Result<Self, SkylineError> {
        let mut sector = Self::new(&level.sector);

        for (index, mapping) in level.objects.iter().enumerate() {
            let Some(class) = mapping.get::<String>("class")? else {
                warn!(index, "level object without a class, skipping");
                continue;
            };
            if !factory.has_class(&class) {
                warn!(index, class = %class, "unknown object class, skipping");
                continue;
            }
            let object = factory.create(&class, mapping, screen)?;
            sector.add_object(object);
        }

        debug!(
            sector = %sector.name,
            objects = sector.objects.len(),
            "sector built from level"
        );
        Ok(sector)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn view(&self) -> SectorView {
        SectorView {
            camera: self.camera.translation(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn add_object(&mut self, object: Box<dyn GameObject>) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Box<dyn GameObject>] {
        &self.objects
    }

    /// Remove the object at `index`, as that object's editor remove option does.
    ///
    /// Names are optional and need not be unique, so the editor addresses
    /// objects by position.
    pub fn remove_object_at(&mut self, index: usize) -> Option<Box<dyn GameObject>> {
        (index < self.objects.len()).then(|| self.objects.remove(index))
    }

    pub fn update(&mut self, dt_sec: f32) {
        for object in &mut self.objects {
            object.update(dt_sec);
        }
    }

    /// Draw every object in insertion order under the camera translation.
    pub fn draw(&mut self, context: &mut dyn DrawingContext) {
        let view = self.view();
        context.push_transform();
        context.set_translation(view.camera);
        for object in &mut self.objects {
            object.draw(context, &view);
        }
        context.pop_transform();
    }

    pub fn on_window_resize(&mut self, size: ScreenSize) {
        for object in &mut self.objects {
            object.on_window_resize(size);
        }
    }

    /// Serialize the sector, leaving out objects that refuse to save under `editor`.
    pub fn save(&self, editor: &EditorContext) -> LevelFile {
        let mut level = LevelFile::new(SectorHeader {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
        });
        for object in &self.objects {
            if !object.do_save(editor) {
                debug!(class = object.class_name(), "object not saved in this editor mode");
                continue;
            }
            let mut writer = Writer::new();
            object.save(&mut writer);
            level.push_object(object.class_name(), writer);
        }
        level
    }

    /// Script handle for the gradient called `name`.
    pub fn gradient_script(&mut self, name: &str) -> Option<GradientScript<'_>> {
        self.objects
            .iter_mut()
            .filter(|o| o.name() == name)
            .find_map(|o| o.as_any_mut().downcast_mut::<Gradient>())
            .map(GradientScript::new)
    }
}
