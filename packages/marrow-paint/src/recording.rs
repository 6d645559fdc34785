use kurbo::{Affine, BezPath, Shape, Stroke};
use peniko::{BlendMode, BrushRef, Color, Fill, Gradient};

use crate::scene::PaintScene;

const DEFAULT_TOLERANCE: f64 = 0.1;

#[derive(Clone)]
pub enum RenderCommand {
    PushLayer(LayerCmd),
    PopLayer,
    Stroke(StrokeCmd),
    Fill(FillCmd),
}

#[derive(Clone)]
pub enum RecordedBrush {
    /// Solid color brush.
    Solid(Color),
    /// Gradient brush.
    Gradient(Gradient),
}

#[derive(Clone)]
pub struct LayerCmd {
    pub blend: BlendMode,
    pub alpha: f32,
    pub transform: Affine,
    pub clip: BezPath,
}

#[derive(Clone)]
pub struct StrokeCmd {
    pub style: Stroke,
    pub transform: Affine,
    pub brush: RecordedBrush,
    pub brush_transform: Option<Affine>,
    pub shape: BezPath,
}

#[derive(Clone)]
pub struct FillCmd {
    pub fill: Fill,
    pub transform: Affine,
    pub brush: RecordedBrush,
    pub brush_transform: Option<Affine>,
    pub shape: BezPath,
}

/// A [`PaintScene`] that records commands instead of rasterizing, with
/// shapes flattened to [`BezPath`]s. Replayable against a real scene and
/// inspectable by tests.
pub struct Recording {
    pub tolerance: f64,
    pub cmds: Vec<RenderCommand>,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            cmds: Vec::new(),
        }
    }
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            cmds: Vec::new(),
        }
    }
}

fn convert_brushref(brush_ref: BrushRef<'_>) -> RecordedBrush {
    match brush_ref {
        BrushRef::Solid(color) => RecordedBrush::Solid(color),
        BrushRef::Gradient(gradient) => RecordedBrush::Gradient(gradient.clone()),
        // Skeleton painting never uses image brushes
        BrushRef::Image(_) => RecordedBrush::Solid(Color::TRANSPARENT),
    }
}

impl PaintScene for Recording {
    fn reset(&mut self) {
        self.cmds.clear()
    }

    fn push_layer(
        &mut self,
        blend: impl Into<BlendMode>,
        alpha: f32,
        transform: Affine,
        clip: &impl Shape,
    ) {
        let blend = blend.into();
        let clip = clip.to_path(self.tolerance);
        let layer = LayerCmd {
            blend,
            alpha,
            transform,
            clip,
        };
        self.cmds.push(RenderCommand::PushLayer(layer));
    }

    fn pop_layer(&mut self) {
        self.cmds.push(RenderCommand::PopLayer);
    }

    fn stroke<'a>(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        let shape = shape.to_path(self.tolerance);
        let brush = convert_brushref(brush.into());
        let stroke = StrokeCmd {
            style: style.clone(),
            transform,
            brush,
            brush_transform,
            shape,
        };
        self.cmds.push(RenderCommand::Stroke(stroke));
    }

    fn fill<'a>(
        &mut self,
        style: Fill,
        transform: Affine,
        brush: impl Into<BrushRef<'a>>,
        brush_transform: Option<Affine>,
        shape: &impl Shape,
    ) {
        let shape = shape.to_path(self.tolerance);
        let brush = convert_brushref(brush.into());
        let fill = FillCmd {
            fill: style,
            transform,
            brush,
            brush_transform,
            shape,
        };
        self.cmds.push(RenderCommand::Fill(fill));
    }
}
