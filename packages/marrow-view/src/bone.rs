use marrow_traits::IntRect;
use peniko::Color;

/// Descriptor for one placeholder shape bound to a child view.
///
/// Appearance fields left as `None` fall back to the overlay defaults. The
/// rect is absent until the overlay has captured geometry from a laid-out
/// view.
#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    pub view_id: usize,
    pub color: Option<Color>,
    pub corner_radius: Option<f64>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub rect: Option<IntRect>,
}

impl Bone {
    pub fn new(view_id: usize) -> Self {
        Self {
            view_id,
            color: None,
            corner_radius: None,
            width: None,
            height: None,
            rect: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = Some(corner_radius);
        self
    }

    /// Draw the bone at a fixed size, centered within the view's captured
    /// bounds, instead of filling them.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// The rect this bone is drawn at: the captured bounds, resized around
    /// their center when a custom size is set. `None` until capture.
    pub fn draw_rect(&self) -> Option<IntRect> {
        let rect = self.rect?;
        if self.width.is_none() && self.height.is_none() {
            return Some(rect);
        }
        let width = self.width.unwrap_or(rect.width());
        let height = self.height.unwrap_or(rect.height());
        let left = rect.left + (rect.width() - width) / 2;
        let top = rect.top + (rect.height() - height) / 2;
        Some(IntRect::from_origin_size(left, top, width, height))
    }
}
