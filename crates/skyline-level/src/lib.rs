//! Level file reading and writing.
//!
//! Objects read their fields from a [`ReaderMapping`] and write them back
//! through a [`Writer`]; [`LevelFile`] ties the mappings of one sector
//! together and handles the file on disk.

pub mod level_file;
pub mod reader;
pub mod writer;

pub use level_file::{load_level, save_level, LevelFile, SectorHeader};
pub use reader::{reader_get_layer, ReaderMapping};
pub use writer::Writer;
