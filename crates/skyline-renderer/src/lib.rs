pub mod canvas;
pub mod drawing_context;

pub use canvas::{instance_bytes, Canvas, GradientInstance, GradientRequest};
pub use drawing_context::{DrawingContext, Transform};
