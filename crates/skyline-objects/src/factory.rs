//! Object construction by level file class name.

use std::collections::BTreeMap;

use skyline_common::{LevelError, ObjectError, ScreenSize, SkylineError};
use skyline_level::ReaderMapping;

use crate::game_object::GameObject;
use crate::gradient::Gradient;

/// Builds an object from its level mapping.
pub type ParseFn = fn(&ReaderMapping, ScreenSize) -> Result<Box<dyn GameObject>, LevelError>;

/// Builds a fresh object the way the editor places one.
pub type CreateFn = fn(ScreenSize) -> Box<dyn GameObject>;

#[derive(Clone, Copy)]
struct Constructors {
    parse: ParseFn,
    create: CreateFn,
}

/// Registry of object classes. `Default` registers every built-in class.
pub struct ObjectFactory {
    classes: BTreeMap<&'static str, Constructors>,
}

impl ObjectFactory {
    /// A factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            classes: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, class: &'static str, parse: ParseFn, create: CreateFn) {
        if self
            .classes
            .insert(class, Constructors { parse, create })
            .is_some()
        {
            tracing::debug!(class, "object class re-registered");
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.keys().copied()
    }

    /// Parse an object of `class` from `reader`.
    pub fn create(
        &self,
        class: &str,
        reader: &ReaderMapping,
        screen: ScreenSize,
    ) -> Result<Box<dyn GameObject>, SkylineError> {
        let ctor = self
            .classes
            .get(class)
            .ok_or_else(|| ObjectError::UnknownClass(class.into()))?;
        Ok((ctor.parse)(reader, screen)?)
    }

    /// Create a default object of `class`, as placed from the editor palette.
    pub fn create_default(
        &self,
        class: &str,
        screen: ScreenSize,
    ) -> Result<Box<dyn GameObject>, ObjectError> {
        self.classes
            .get(class)
            .map(|ctor| (ctor.create)(screen))
            .ok_or_else(|| ObjectError::UnknownClass(class.into()))
    }
}

impl Default for ObjectFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(Gradient::CLASS_NAME, parse_gradient, create_gradient);
        factory
    }
}

fn parse_gradient(
    reader: &ReaderMapping,
    screen: ScreenSize,
) -> Result<Box<dyn GameObject>, LevelError> {
    Ok(Box::new(Gradient::from_mapping(reader, screen)?))
}

fn create_gradient(screen: ScreenSize) -> Box<dyn GameObject> {
    Box::new(Gradient::new(screen))
}
