use std::path::PathBuf;

use clap::Parser;
use skyline_common::ScreenSize;

/// Skyline — renders a level's background gradients headlessly.
#[derive(Parser, Debug)]
#[command(name = "skyline", version, about)]
pub struct Args {
    /// Level file to load.
    pub level: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate (overrides `run.frames`).
    #[arg(short = 'n', long)]
    pub frames: Option<u32>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the frame report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write the sector back to this level file after the run.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Resize the window before the first frame.
    #[arg(long, value_name = "WxH", value_parser = parse_screen_size)]
    pub resize: Option<ScreenSize>,

    /// Save as the level editor would.
    #[arg(long)]
    pub editor: bool,

    /// Save as the worldmap editor would (implies --editor).
    #[arg(long)]
    pub worldmap: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_screen_size(s: &str) -> Result<ScreenSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("window size must be non-zero, got '{s}'"));
    }
    Ok(ScreenSize::new(width as f32, height as f32))
}
