//! Builds one key/value mapping of a level file.

use skyline_common::{Color, LevelError};
use toml::{Table, Value};

use crate::reader::ReaderMapping;

/// Collects the fields an object writes when its level is saved.
///
/// Keys keep insertion order so saved files read top to bottom the way
/// objects write them.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    table: Table,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_string(&mut self, key: &str, value: &str) {
        self.table.insert(key.into(), Value::String(value.into()));
    }

    pub fn write_int(&mut self, key: &str, value: i64) {
        self.table.insert(key.into(), Value::Integer(value));
    }

    pub fn write_float_array(&mut self, key: &str, values: &[f32]) {
        let array = values.iter().copied().map(float_value).collect();
        self.table.insert(key.into(), Value::Array(array));
    }

    /// Colors are always written with four components.
    pub fn write_color(&mut self, key: &str, color: Color) {
        self.write_float_array(key, &color.to_vec());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    /// Reopen what was written for reading, without going through text.
    pub fn into_mapping(self) -> ReaderMapping {
        ReaderMapping::new(self.table)
    }

    pub fn to_toml_string(&self) -> Result<String, LevelError> {
        toml::to_string_pretty(&self.table)
            .map_err(|e| LevelError::WriteError(format!("failed to serialize TOML: {e}")))
    }
}

/// `f32` widened through its shortest decimal form, so `0.3` is written
/// as `0.3` rather than `0.30000001192092896`.
fn float_value(value: f32) -> Value {
    let widened = value.to_string().parse::<f64>().unwrap_or(f64::from(value));
    Value::Float(widened)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_values_read_back() {
        let mut w = Writer::new();
        w.write_string("name", "sky");
        w.write_int("layer", -300);
        w.write_float_array("scale", &[0.5, 2.0]);

        let r = w.into_mapping();
        assert_eq!(r.get::<String>("name").unwrap().as_deref(), Some("sky"));
        assert_eq!(r.get::<i32>("layer").unwrap(), Some(-300));
        assert_eq!(r.get::<Vec<f32>>("scale").unwrap(), Some(vec![0.5, 2.0]));
    }

    #[test]
    fn color_is_written_with_alpha() {
        let mut w = Writer::new();
        w.write_color("top_color", Color::rgb(0.3, 0.4, 0.75));
        let text = w.to_toml_string().unwrap();
        assert!(text.contains("0.3"));
        assert!(!text.contains("0.30000001"));

        let r = w.into_mapping();
        assert_eq!(
            r.get::<Vec<f32>>("top_color").unwrap(),
            Some(vec![0.3, 0.4, 0.75, 1.0])
        );
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut w = Writer::new();
        w.write_int("layer", 1);
        w.write_string("direction", "horizontal");
        w.write_color("left_color", Color::WHITE);
        let keys: Vec<String> = w.into_table().keys().cloned().collect();
        assert_eq!(keys, ["layer", "direction", "left_color"]);
    }
}
