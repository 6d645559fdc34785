use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use marrow_traits::{DummyShellProvider, ShellProvider, Viewport};
use peniko::Color;

use crate::bone::Bone;
use crate::config::{self, OverlayConfig};
use crate::registry::BoneRegistry;
use crate::tree::ViewTree;

/// A skeleton placeholder overlay.
///
/// Owns a [`ViewTree`] mirroring the host hierarchy and a [`BoneRegistry`]
/// of placeholders bound to its views. Construction arms a one-shot layout
/// hook on the root view; once the host's layout pass has run,
/// [`poll`](Self::poll) captures each bone's absolute rectangle and the
/// overlay is ready to paint.
pub struct SkeletonOverlay {
    tree: ViewTree,
    bones: BoneRegistry,

    viewport: Viewport,
    background_color: Option<Color>,
    bone_color: Option<Color>,
    corner_radius: Option<f64>,

    shell_provider: Arc<dyn ShellProvider>,

    /// Set by the root layout hook, consumed by [`poll`](Self::poll)
    layout_ready: Rc<Cell<bool>>,
    /// Whether bone geometry has been captured at least once
    captured: bool,
}

impl SkeletonOverlay {
    pub fn new(mut tree: ViewTree, config: OverlayConfig) -> Self {
        let shell_provider = config
            .shell_provider
            .unwrap_or_else(|| Arc::new(DummyShellProvider));

        let layout_ready = Rc::new(Cell::new(false));
        let flag = Rc::clone(&layout_ready);
        let shell = Arc::clone(&shell_provider);
        tree.on_next_layout(tree.root_id(), move |_view| {
            flag.set(true);
            shell.request_redraw();
        });

        Self {
            tree,
            bones: BoneRegistry::new(),
            viewport: config.viewport.unwrap_or_default(),
            background_color: config.background_color,
            bone_color: config.bone_color,
            corner_radius: config.corner_radius,
            shell_provider,
            layout_ready,
            captured: false,
        }
    }

    /// Register a default-appearance bone for each of the given views.
    pub fn skeleton_views(&mut self, view_ids: impl IntoIterator<Item = usize>) {
        for view_id in view_ids {
            self.bones.register(Bone::new(view_id));
        }
    }

    /// Register a custom bone.
    pub fn add_bone(&mut self, bone: Bone) {
        self.bones.register(bone);
    }

    /// Flush pending layout work.
    ///
    /// Returns `true` when the root layout hook has fired since the last
    /// poll and bone geometry was (re)captured; the caller should repaint.
    pub fn poll(&mut self) -> bool {
        if !self.layout_ready.replace(false) {
            return false;
        }
        self.capture_bones();
        self.captured = true;
        true
    }

    /// Whether bone geometry has been captured at least once.
    pub fn is_ready(&self) -> bool {
        self.captured
    }

    /// Re-capture bone geometry on the next [`poll`](Self::poll) without
    /// waiting for another layout pass.
    pub fn invalidate(&mut self) {
        self.layout_ready.set(true);
    }

    /// Clear all bones and request a repaint.
    pub fn hide(&mut self) {
        self.bones.clear();
        self.shell_provider.request_redraw();
    }

    fn capture_bones(&mut self) {
        let view_ids: Vec<usize> = self.bones.iter().map(|bone| bone.view_id).collect();
        for view_id in view_ids {
            let Some(view) = self.tree.get(view_id) else {
                #[cfg(feature = "tracing")]
                tracing::warn!("skeleton bone references missing view {view_id}");
                continue;
            };
            if view.is_hidden() {
                if let Some(bone) = self.bones.get_mut(view_id) {
                    bone.rect = None;
                }
                continue;
            }
            if !view.is_laid_out() {
                #[cfg(feature = "tracing")]
                tracing::debug!("view {view_id} not laid out yet, bone left uncaptured");
                continue;
            }
            let Some(rect) = self.tree.absolute_bounds(view_id) else {
                continue;
            };
            let Some(bone) = self.bones.get(view_id) else {
                continue;
            };
            let mut updated = bone.clone();
            updated.rect = Some(rect);
            self.bones.update(view_id, updated);
        }
    }

    // Resolved appearance, consumed by the painter.

    pub fn background_color(&self) -> Color {
        self.background_color
            .unwrap_or_else(|| config::default_background_color(self.viewport.color_scheme))
    }

    pub fn bone_color(&self, bone: &Bone) -> Color {
        bone.color
            .or(self.bone_color)
            .unwrap_or_else(|| config::default_bone_color(self.viewport.color_scheme))
    }

    pub fn corner_radius(&self, bone: &Bone) -> f64 {
        bone.corner_radius
            .or(self.corner_radius)
            .unwrap_or(config::DEFAULT_CORNER_RADIUS)
    }

    pub fn bones(&self) -> &BoneRegistry {
        &self.bones
    }

    pub fn bones_mut(&mut self) -> &mut BoneRegistry {
        &mut self.bones
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.tree
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::SkeletonOverlay;
    use crate::bone::Bone;
    use crate::config::OverlayConfig;
    use crate::tree::ViewTree;
    use marrow_traits::{IntRect, ShellProvider};
    use peniko::Color;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingShell {
        redraws: AtomicUsize,
    }

    impl ShellProvider for CountingShell {
        fn request_redraw(&self) {
            self.redraws.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn overlay_with_two_views() -> (SkeletonOverlay, usize, usize, Arc<CountingShell>) {
        let mut tree = ViewTree::new();
        let root = tree.root_id();
        let title = tree.create_view(root).unwrap();
        let avatar = tree.create_view(root).unwrap();

        let shell = Arc::new(CountingShell::default());
        let config = OverlayConfig {
            shell_provider: Some(shell.clone() as Arc<dyn ShellProvider>),
            ..Default::default()
        };
        (SkeletonOverlay::new(tree, config), title, avatar, shell)
    }

    fn lay_out(overlay: &mut SkeletonOverlay, title: usize, avatar: usize) {
        let root = overlay.tree().root_id();
        let tree = overlay.tree_mut();
        tree.set_bounds(title, IntRect::new(10, 10, 210, 40));
        tree.set_bounds(avatar, IntRect::new(10, 50, 74, 114));
        tree.set_bounds(root, IntRect::new(0, 0, 400, 800));
    }

    #[test]
    fn poll_is_inert_until_root_layout() {
        let (mut overlay, title, avatar, shell) = overlay_with_two_views();
        overlay.skeleton_views([title, avatar]);

        assert!(!overlay.poll());
        assert!(!overlay.is_ready());
        assert_eq!(shell.redraws.load(Ordering::Relaxed), 0);

        lay_out(&mut overlay, title, avatar);
        assert_eq!(shell.redraws.load(Ordering::Relaxed), 1);

        assert!(overlay.poll());
        assert!(overlay.is_ready());
        // Consumed: nothing further pending
        assert!(!overlay.poll());
    }

    #[test]
    fn poll_captures_absolute_rects_in_registration_order() {
        let (mut overlay, title, avatar, _shell) = overlay_with_two_views();
        overlay.skeleton_views([title, avatar]);
        lay_out(&mut overlay, title, avatar);
        overlay.poll();

        let rects: Vec<Option<IntRect>> = overlay.bones().iter().map(|bone| bone.rect).collect();
        assert_eq!(
            rects,
            vec![
                Some(IntRect::new(10, 10, 210, 40)),
                Some(IntRect::new(10, 50, 74, 114)),
            ]
        );
    }

    #[test]
    fn capture_skips_missing_and_hidden_views() {
        let (mut overlay, title, avatar, _shell) = overlay_with_two_views();
        overlay.skeleton_views([title, avatar, 999]);
        overlay.tree_mut().set_hidden(avatar, true);
        lay_out(&mut overlay, title, avatar);
        overlay.poll();

        assert!(overlay.bones().get(title).unwrap().rect.is_some());
        assert!(overlay.bones().get(avatar).unwrap().rect.is_none());
        assert!(overlay.bones().get(999).unwrap().rect.is_none());
    }

    #[test]
    fn capture_writes_back_through_the_update_only_path() {
        let (mut overlay, title, avatar, _shell) = overlay_with_two_views();
        overlay.skeleton_views([title, avatar]);
        lay_out(&mut overlay, title, avatar);

        // A bone removed before capture stays absent: capture updates, it
        // never inserts.
        overlay.bones_mut().remove(avatar);
        overlay.poll();
        assert!(overlay.bones().get(avatar).is_none());
        assert_eq!(overlay.bones().len(), 1);
    }

    #[test]
    fn custom_bones_keep_their_appearance_after_capture() {
        let (mut overlay, title, _avatar, _shell) = overlay_with_two_views();
        let red = Color::from_rgb8(0xFF, 0, 0);
        overlay.add_bone(Bone::new(title).with_color(red).with_size(100, 10));
        lay_out(&mut overlay, title, _avatar);
        overlay.poll();

        let bone = overlay.bones().get(title).unwrap();
        assert_eq!(bone.color, Some(red));
        assert_eq!(bone.rect, Some(IntRect::new(10, 10, 210, 40)));
        // 100x10 centered in the 200x30 captured rect
        assert_eq!(bone.draw_rect(), Some(IntRect::new(60, 20, 160, 30)));
    }

    #[test]
    fn hide_clears_bones_and_requests_redraw() {
        let (mut overlay, title, avatar, shell) = overlay_with_two_views();
        overlay.skeleton_views([title, avatar]);
        lay_out(&mut overlay, title, avatar);
        overlay.poll();
        let redraws_before = shell.redraws.load(Ordering::Relaxed);

        overlay.hide();
        assert!(overlay.bones().is_empty());
        assert_eq!(shell.redraws.load(Ordering::Relaxed), redraws_before + 1);
    }

    #[test]
    fn invalidate_forces_recapture() {
        let (mut overlay, title, avatar, _shell) = overlay_with_two_views();
        overlay.skeleton_views([title]);
        lay_out(&mut overlay, title, avatar);
        overlay.poll();

        // Later layout passes don't re-arm the one-shot hook...
        overlay.tree_mut().set_bounds(title, IntRect::new(0, 0, 50, 20));
        assert!(!overlay.poll());
        assert_eq!(
            overlay.bones().get(title).unwrap().rect,
            Some(IntRect::new(10, 10, 210, 40))
        );

        // ...but an explicit invalidate does.
        overlay.invalidate();
        assert!(overlay.poll());
        assert_eq!(
            overlay.bones().get(title).unwrap().rect,
            Some(IntRect::new(0, 0, 50, 20))
        );
    }
}
