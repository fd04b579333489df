//! The contract objects draw against.

use skyline_common::{Color, GradientDirection, Rectf, Vector};

/// Translation state saved and restored by `push_transform`/`pop_transform`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translation: Vector,
}

/// Receives draw requests from game objects.
///
/// Implementations own a transform stack. The current translation is
/// applied to every request issued while it is in effect.
pub trait DrawingContext {
    /// Save the current transform.
    fn push_transform(&mut self);

    /// Restore the transform saved by the matching `push_transform`.
    fn pop_transform(&mut self);

    fn set_translation(&mut self, translation: Vector);

    fn translation(&self) -> Vector;

    /// Fill `region` with a two-color gradient on `layer`.
    ///
    /// For horizontal directions `top` is the left color and `bottom` the
    /// right one.
    fn draw_gradient(
        &mut self,
        top: Color,
        bottom: Color,
        layer: i32,
        direction: GradientDirection,
        region: Rectf,
    );
}
