//! Read access to one key/value mapping of a level file.
//!
//! Missing keys are never an error: every getter returns `Ok(None)` so the
//! caller picks its own default. A key that is present but holds the wrong
//! kind of value is reported as [`LevelError::InvalidField`].

use serde::de::DeserializeOwned;
use skyline_common::{Color, LevelError};
use toml::Table;

/// A single table of a level file, e.g. one `[[objects]]` entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReaderMapping {
    table: Table,
}

impl ReaderMapping {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Parse a standalone TOML snippet into a mapping.
    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let table: Table = toml::from_str(source)
            .map_err(|e| LevelError::ParseError(format!("failed to parse TOML: {e}")))?;
        Ok(Self::new(table))
    }

    pub fn has(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Deserialize the value under `key` into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, LevelError> {
        let Some(value) = self.table.get(key) else {
            return Ok(None);
        };
        let parsed: T = value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| LevelError::invalid_field(key, e.to_string()))?;
        Ok(Some(parsed))
    }

    /// Like [`get`](Self::get) but substitutes `default` for a missing key.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, LevelError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Read a 3 (RGB) or 4 (RGBA) element numeric array as a color.
    pub fn get_color(&self, key: &str) -> Result<Option<Color>, LevelError> {
        let Some(components) = self.get::<Vec<f32>>(key)? else {
            return Ok(None);
        };
        Color::from_components(&components).map(Some).ok_or_else(|| {
            LevelError::invalid_field(
                key,
                format!("expected 3 or 4 components, got {}", components.len()),
            )
        })
    }
}

impl From<Table> for ReaderMapping {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}

/// Read the draw layer of an object.
///
/// `layer` wins; the editor's `z-pos` name is accepted when `layer` is
/// absent; otherwise `default`.
pub fn reader_get_layer(reader: &ReaderMapping, default: i32) -> Result<i32, LevelError> {
    if let Some(layer) = reader.get::<i32>("layer")? {
        return Ok(layer);
    }
    Ok(reader.get::<i32>("z-pos")?.unwrap_or(default))
}
