use kurbo::{Affine, Rect, RoundedRect};
use marrow_view::{Bone, SkeletonOverlay};
use peniko::{Fill, Mix};

use crate::scene::PaintScene;

/// Draw a skeleton overlay into the given scene.
///
/// This assumes the host has laid out the view tree and the overlay has been
/// polled; bones without captured geometry are skipped.
pub fn paint_overlay(
    scene: &mut impl PaintScene,
    overlay: &SkeletonOverlay,
    scale: f64,
    width: u32,
    height: u32,
) {
    let painter = SkeletonOverlayPainter {
        overlay,
        scale,
        width,
        height,
    };
    painter.paint_overlay(scene);
}

/// A short-lived struct which holds the parameters for painting an overlay
/// so that we don't have to pass them down as arguments
pub struct SkeletonOverlayPainter<'overlay> {
    /// Input parameters (read only) for generating the scene
    pub overlay: &'overlay SkeletonOverlay,
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

impl SkeletonOverlayPainter<'_> {
    pub fn paint_overlay(&self, scene: &mut impl PaintScene) {
        scene.reset();

        let root_bounds = self.overlay.tree().root_view().bounds();
        let root_rect = root_bounds.to_rect();
        let bg_width = (self.width as f64).max(root_rect.width() * self.scale);
        let bg_height = (self.height as f64).max(root_rect.height() * self.scale);

        // Sheet background, in physical pixels
        let background = Rect::new(0.0, 0.0, bg_width, bg_height);
        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            self.overlay.background_color(),
            None,
            &background,
        );

        if root_bounds.is_empty() {
            return;
        }

        // Bones are in logical units and clipped to the root view's rect
        let transform = Affine::scale(self.scale);
        scene.push_layer(Mix::Normal, 1.0, transform, &root_rect);
        for bone in self.overlay.bones().iter() {
            self.paint_bone(scene, bone, transform);
        }
        scene.pop_layer();
    }

    fn paint_bone(&self, scene: &mut impl PaintScene, bone: &Bone, transform: Affine) {
        let Some(rect) = bone.draw_rect() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("bone for view {} has no geometry, skipping", bone.view_id);
            return;
        };
        if rect.is_empty() {
            return;
        }

        let radius = self.overlay.corner_radius(bone);
        let shape = RoundedRect::from_rect(rect.to_rect(), radius);
        scene.fill(
            Fill::NonZero,
            transform,
            self.overlay.bone_color(bone),
            None,
            &shape,
        );
    }
}
