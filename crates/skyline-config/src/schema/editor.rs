//! Editor state the engine runs under.

use serde::{Deserialize, Serialize};

/// Whether the level editor is open and which mode it is in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub active: bool,
    /// Worldmap objects are saved through a different path.
    pub worldmap_mode: bool,
}
