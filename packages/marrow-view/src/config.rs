use std::sync::Arc;

use marrow_traits::{ColorScheme, ShellProvider, Viewport};
use peniko::Color;

pub(crate) const DEFAULT_CORNER_RADIUS: f64 = 8.0;

/// Options used when constructing a [`SkeletonOverlay`](crate::SkeletonOverlay)
#[derive(Default)]
pub struct OverlayConfig {
    /// The initial `Viewport`
    pub viewport: Option<Viewport>,
    /// Sheet color painted behind the bones
    pub background_color: Option<Color>,
    /// Color for bones that don't carry their own
    pub bone_color: Option<Color>,
    /// Corner radius for bones that don't carry their own
    pub corner_radius: Option<f64>,
    /// Shell provider to handle redraw requests
    pub shell_provider: Option<Arc<dyn ShellProvider>>,
}

pub(crate) fn default_background_color(scheme: ColorScheme) -> Color {
    match scheme {
        ColorScheme::Light => Color::WHITE,
        ColorScheme::Dark => Color::from_rgb8(0x12, 0x12, 0x12),
    }
}

pub(crate) fn default_bone_color(scheme: ColorScheme) -> Color {
    match scheme {
        ColorScheme::Light => Color::from_rgb8(0xE0, 0xE0, 0xE0),
        ColorScheme::Dark => Color::from_rgb8(0x3A, 0x3A, 0x3A),
    }
}
