//! Headless frame loop: update, draw into a canvas, scroll the camera.

use skyline_common::{ScreenSize, Vector};
use skyline_objects::Sector;
use skyline_renderer::{instance_bytes, Canvas};
use tracing::debug;

use crate::report::FrameReport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePlan {
    pub frames: u32,
    pub frame_time: f32,
    /// Horizontal camera scroll per frame, in pixels.
    pub camera_speed: f32,
}

/// Resize the canvas and every object in the sector.
pub fn resize(sector: &mut Sector, canvas: &mut Canvas, size: ScreenSize) {
    debug!(width = size.width, height = size.height, "window resized");
    canvas.resize(size);
    sector.on_window_resize(size);
}

/// Run `plan.frames` frames and report what each one drew.
pub fn run_frames(sector: &mut Sector, canvas: &mut Canvas, plan: FramePlan) -> Vec<FrameReport> {
    let mut reports = Vec::with_capacity(plan.frames as usize);

    for frame in 0..plan.frames {
        canvas.clear();
        sector.update(plan.frame_time);
        sector.draw(canvas);

        let instances = canvas.instances();
        reports.push(FrameReport {
            frame,
            camera: sector.camera().translation(),
            draws: canvas.requests(),
            instance_bytes: instance_bytes(&instances).len(),
        });

        sector
            .camera_mut()
            .scroll_by(Vector::new(plan.camera_speed, 0.0));
    }

    reports
}
