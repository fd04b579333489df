//! Level objects: the `GameObject` contract, the background gradient, and
//! the sector that owns them.

pub mod camera;
pub mod factory;
pub mod game_object;
pub mod gradient;
pub mod scripting;
pub mod sector;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use camera::Camera;
pub use factory::ObjectFactory;
pub use game_object::{EditorContext, GameObject, Viewport};
pub use gradient::Gradient;
pub use scripting::GradientScript;
pub use sector::{Sector, SectorView};
pub use settings::{ObjectOption, ObjectSettings, OptionKind, OptionValue};
