//! Recording drawing context.
//!
//! `Canvas` keeps the transform stack and collects every gradient request of
//! a frame. At the end of the frame the requests are sorted by layer and
//! packed into GPU-ready [`GradientInstance`]s.

use serde::Serialize;
use skyline_common::{Color, GradientDirection, Rectf, ScreenSize, Vector};

use crate::drawing_context::{DrawingContext, Transform};

// ---------------------------------------------------------------------------
// GradientRequest
// ---------------------------------------------------------------------------

/// One recorded `draw_gradient` call, region already in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientRequest {
    pub top: Color,
    pub bottom: Color,
    pub layer: i32,
    pub direction: GradientDirection,
    pub region: Rectf,
}

// ---------------------------------------------------------------------------
// GradientInstance
// ---------------------------------------------------------------------------

/// Per-instance data for an instanced gradient quad.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct GradientInstance {
    /// Position and size in pixels: [x, y, width, height].
    pub rect: [f32; 4],
    /// RGBA start color (top or left).
    pub top: [f32; 4],
    /// RGBA end color (bottom or right).
    pub bottom: [f32; 4],
    /// [direction index, horizontal axis flag, layer, unused].
    pub params: [f32; 4],
}

impl From<&GradientRequest> for GradientInstance {
    fn from(req: &GradientRequest) -> Self {
        let axis = if req.direction.is_horizontal() { 1.0 } else { 0.0 };
        Self {
            rect: [
                req.region.x,
                req.region.y,
                req.region.width,
                req.region.height,
            ],
            top: req.top.to_array(),
            bottom: req.bottom.to_array(),
            params: [req.direction.index() as f32, axis, req.layer as f32, 0.0],
        }
    }
}

/// View a batch of instances as raw bytes for a vertex buffer upload.
pub fn instance_bytes(instances: &[GradientInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A [`DrawingContext`] that records requests instead of issuing GPU work.
#[derive(Debug, Clone)]
pub struct Canvas {
    screen: ScreenSize,
    transform: Transform,
    stack: Vec<Transform>,
    requests: Vec<GradientRequest>,
}

impl Canvas {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            transform: Transform::default(),
            stack: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn resize(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    /// Number of transforms currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Requests in the order they were issued.
    pub fn recorded(&self) -> &[GradientRequest] {
        &self.requests
    }

    /// Requests in draw order: lower layers first, issue order within a layer.
    pub fn requests(&self) -> Vec<GradientRequest> {
        let mut sorted = self.requests.clone();
        sorted.sort_by_key(|r| r.layer);
        sorted
    }

    pub fn instances(&self) -> Vec<GradientInstance> {
        self.requests().iter().map(GradientInstance::from).collect()
    }

    /// Drop this frame's requests. The transform stack must already be balanced.
    pub fn clear(&mut self) {
        if !self.stack.is_empty() {
            tracing::warn!(depth = self.stack.len(), "canvas cleared with unbalanced transforms");
            self.stack.clear();
        }
        self.transform = Transform::default();
        self.requests.clear();
    }
}

impl DrawingContext for Canvas {
    fn push_transform(&mut self) {
        self.stack.push(self.transform);
    }

    fn pop_transform(&mut self) {
        match self.stack.pop() {
            Some(saved) => self.transform = saved,
            None => tracing::warn!("pop_transform on an empty transform stack"),
        }
    }

    fn set_translation(&mut self, translation: Vector) {
        self.transform.translation = translation;
    }

    fn translation(&self) -> Vector {
        self.transform.translation
    }

    fn draw_gradient(
        &mut self,
        top: Color,
        bottom: Color,
        layer: i32,
        direction: GradientDirection,
        region: Rectf,
    ) {
        // Translation moves the world, so it is subtracted from world positions.
        let region = region.translated(-self.transform.translation);
        self.requests.push(GradientRequest {
            top,
            bottom,
            layer,
            direction,
            region,
        });
    }
}
