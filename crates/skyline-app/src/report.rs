//! What a headless run drew, frame by frame.

use std::fmt::Write as _;

use serde::Serialize;
use skyline_common::{Color, ScreenSize, Vector};
use skyline_renderer::GradientRequest;

#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub frame: u32,
    pub camera: Vector,
    /// Requests in draw order.
    pub draws: Vec<GradientRequest>,
    /// Size of the packed instance buffer for this frame.
    pub instance_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub level: String,
    pub sector: String,
    pub screen: ScreenSize,
    pub frames: Vec<FrameReport>,
}

impl RunReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} [{}] at {}x{}",
            self.level, self.sector, self.screen.width, self.screen.height
        );
        for frame in &self.frames {
            let _ = writeln!(
                out,
                "frame {} camera ({}, {}) {} draw(s), {} bytes",
                frame.frame,
                frame.camera.x,
                frame.camera.y,
                frame.draws.len(),
                frame.instance_bytes
            );
            for draw in &frame.draws {
                let r = draw.region;
                let _ = writeln!(
                    out,
                    "  layer {:>5} {:<17} ({}, {}) {}x{}  {} -> {}",
                    draw.layer,
                    draw.direction.as_str(),
                    r.x,
                    r.y,
                    r.width,
                    r.height,
                    color_text(draw.top),
                    color_text(draw.bottom)
                );
            }
        }
        out
    }
}

fn color_text(c: Color) -> String {
    format!("rgba({:.2}, {:.2}, {:.2}, {:.2})", c.red, c.green, c.blue, c.alpha)
}
