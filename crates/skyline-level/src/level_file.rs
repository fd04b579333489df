//! Level files on disk.
//!
//! A level is a TOML document with one `[sector]` header and an ordered
//! `[[objects]]` array. Each object table carries a `class` key naming the
//! object type; the remaining keys belong to that object.
//!
//! Saves are atomic (write to `.tmp`, then rename).

use serde::{Deserialize, Serialize};
use skyline_common::LevelError;
use std::path::Path;
use toml::Table;

use crate::reader::ReaderMapping;
use crate::writer::Writer;

/// Geometry and identity of the level's sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorHeader {
    pub name: String,
    pub width: f32,
    pub height: f32,
}

impl Default for SectorHeader {
    fn default() -> Self {
        Self {
            name: "main".into(),
            width: 800.0,
            height: 600.0,
        }
    }
}

/// A parsed level: sector header plus raw object mappings in file order.
#[derive(Debug, Clone, Default)]
pub struct LevelFile {
    pub sector: SectorHeader,
    pub objects: Vec<ReaderMapping>,
}

#[derive(Default, Serialize, Deserialize)]
struct RawLevel {
    #[serde(default)]
    sector: SectorHeader,
    #[serde(default)]
    objects: Vec<Table>,
}

impl LevelFile {
    pub fn new(sector: SectorHeader) -> Self {
        Self {
            sector,
            objects: Vec::new(),
        }
    }

    pub fn parse(source: &str) -> Result<Self, LevelError> {
        let raw: RawLevel = toml::from_str(source)
            .map_err(|e| LevelError::ParseError(format!("failed to parse level: {e}")))?;
        Ok(Self {
            sector: raw.sector,
            objects: raw.objects.into_iter().map(ReaderMapping::new).collect(),
        })
    }

    /// Append an object table, `class` first.
    pub fn push_object(&mut self, class: &str, fields: Writer) {
        let mut table = Table::new();
        table.insert("class".into(), toml::Value::String(class.into()));
        table.extend(fields.into_table());
        self.objects.push(ReaderMapping::new(table));
    }

    pub fn to_toml_string(&self) -> Result<String, LevelError> {
        let raw = RawLevel {
            sector: self.sector.clone(),
            objects: self.objects.iter().map(|m| m.table().clone()).collect(),
        };
        toml::to_string_pretty(&raw)
            .map_err(|e| LevelError::WriteError(format!("failed to serialize level: {e}")))
    }
}

/// Read and parse a level file.
pub fn load_level(path: &Path) -> Result<LevelFile, LevelError> {
    if !path.exists() {
        return Err(LevelError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| LevelError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let level = LevelFile::parse(&content)?;

    tracing::info!(
        path = %path.display(),
        sector = %level.sector.name,
        objects = level.objects.len(),
        "loaded level"
    );
    Ok(level)
}

/// Write a level file, creating parent directories as needed.
pub fn save_level(level: &LevelFile, path: &Path) -> Result<(), LevelError> {
    let text = level.to_toml_string()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LevelError::WriteError(format!(
                "failed to create level directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &text).map_err(|e| {
        LevelError::WriteError(format!("failed to write {}: {e}", tmp_path.display()))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail across filesystems and on some Windows setups.
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        std::fs::write(path, &text).map_err(|e2| {
            LevelError::WriteError(format!("failed to write {}: {e2}", path.display()))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "level saved to disk");
    Ok(())
}
