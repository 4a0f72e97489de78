// File: crates/schedule-core/src/surface.rs
// Summary: Drawing-surface abstraction used by the renderer, plus a headless command recorder.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, RectF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: skia::Color,
    pub align: TextAlign,
    /// Rotation around the anchor, degrees; negative turns counter-clockwise.
    pub rotation_deg: f32,
    pub mono_numeric: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, align: TextAlign::Left, rotation_deg: 0.0, mono_numeric: false }
    }
    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
    pub fn rotated(mut self, degrees: f32) -> Self {
        self.rotation_deg = degrees;
        self
    }
    pub fn numeric(mut self) -> Self {
        self.mono_numeric = true;
        self
    }
}

/// Immediate-mode 2D surface. All coordinates are CSS pixels; implementations
/// apply the device scale set by [`DrawSurface::set_resolution`].
pub trait DrawSurface {
    /// Resize the backing store to `backing_width x backing_height` device pixels
    /// and scale subsequent drawing by `scale`.
    fn set_resolution(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()>;
    /// Wipe the whole surface to transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: RectF, color: skia::Color);
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: skia::Color);
    /// Fill the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: skia::Color);
    /// `at` is the text baseline anchor; alignment is relative to it.
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetResolution { width: u32, height: u32, scale: f32 },
    Clear,
    FillRect { rect: RectF, color: skia::Color },
    Line { from: Point, to: Point, width: f32, color: skia::Color },
    Polygon { points: Vec<Point>, color: skia::Color },
    Text { text: String, at: Point, style: TextStyle },
}

/// Surface that records every call. Used by tests and for headless inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub backing_size: (u32, u32),
    pub scale: f32,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    /// Commands issued since the most recent `clear`.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn texts(&self) -> Vec<&str> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> Vec<&[Point]> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Reject any recorded coordinate that is NaN or infinite.
    pub fn validate(&self) -> ChartResult<()> {
        for (i, c) in self.commands.iter().enumerate() {
            let finite = match c {
                DrawCommand::SetResolution { scale, .. } => scale.is_finite(),
                DrawCommand::Clear => true,
                DrawCommand::FillRect { rect, .. } => {
                    Point::new(rect.left, rect.top).is_finite() && Point::new(rect.right, rect.bottom).is_finite()
                }
                DrawCommand::Line { from, to, width, .. } => from.is_finite() && to.is_finite() && width.is_finite(),
                DrawCommand::Polygon { points, .. } => points.iter().all(Point::is_finite),
                DrawCommand::Text { at, .. } => at.is_finite(),
            };
            if !finite {
                return Err(ChartError::Surface(format!("command {i} has non-finite coordinates: {c:?}")));
            }
        }
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn set_resolution(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()> {
        self.backing_size = (backing_width, backing_height);
        self.scale = scale;
        self.commands.push(DrawCommand::SetResolution { width: backing_width, height: backing_height, scale });
        Ok(())
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: skia::Color) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, style: *style });
    }
}
