//! Translate a [`SkeletonOverlay`](marrow_view::SkeletonOverlay) into
//! [`PaintScene`] drawing commands.

mod recording;
mod render;
mod scene;

pub use recording::{FillCmd, LayerCmd, RecordedBrush, Recording, RenderCommand, StrokeCmd};
pub use render::{SkeletonOverlayPainter, paint_overlay};
pub use scene::PaintScene;
