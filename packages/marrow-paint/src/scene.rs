use kurbo::{Affine, Shape, Stroke};
use peniko::{BlendMode, BrushRef, Fill};

/// The drawing abstraction skeleton painting targets.
///
/// Implement this for a renderer's scene type to draw overlays with it, or
/// use [`Recording`](crate::Recording) to capture the commands instead.
pub trait PaintScene {
    /// Removes all content from the scene
    fn reset(&mut self);

    /// Pushes a new layer clipped by the specified shape and composed with
    /// previous layers using the specified blend mode.
    /// Every drawing command after this call will be clipped by the shape
    /// until the layer is popped.
    fn push_layer(
        &mut self,
        blend: impl Into<BlendMode>,
        alpha: f32,
        transform: Affine,
        clip: &impl Shape,
    );

    /// Pops the current layer.
    fn pop_layer(&mut self);

    /// Strokes a shape using the specified style and brush.
    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    );

    /// Fills a shape using the specified style and brush.
    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    );
}
