#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    pub window_size: (u32, u32),

    hidpi_scale: f32,

    pub color_scheme: ColorScheme,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 0, 1.0, ColorScheme::default())
    }
}

impl Viewport {
    pub fn new(
        physical_width: u32,
        physical_height: u32,
        scale_factor: f32,
        color_scheme: ColorScheme,
    ) -> Self {
        Self {
            window_size: (physical_width, physical_height),
            hidpi_scale: scale_factor,
            color_scheme,
        }
    }

    pub fn scale(&self) -> f32 {
        self.hidpi_scale
    }

    pub fn scale_f64(&self) -> f64 {
        self.hidpi_scale as f64
    }

    pub fn set_hidpi_scale(&mut self, scale: f32) {
        self.hidpi_scale = scale;
    }
}
