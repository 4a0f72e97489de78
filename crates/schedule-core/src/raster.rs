// File: crates/schedule-core/src/raster.rs
// Summary: Skia CPU raster implementation of `DrawSurface` with PNG and RGBA export.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, RectF};
use crate::surface::{DrawSurface, TextStyle};
use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    scale: f32,
    shaper: TextShaper,
}

impl SkiaSurface {
    /// Create a 1x1 surface; the layout engine sizes it on the first resize.
    pub fn new() -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((1, 1))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, scale: 1.0, shaper: TextShaper::new() })
    }

    /// Backing size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (self.surface.width().max(0) as u32, self.surface.height().max(0) as u32)
    }

    /// Encode the current surface contents as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the surface to a PNG file, creating parent directories.
    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels; returns `(pixels, width, height)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32)> {
        let (w, h) = self.backing_size();
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading {w}x{h} pixels from raster surface failed");
        }
        Ok((pixels, w, h))
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

impl DrawSurface for SkiaSurface {
    fn set_resolution(&mut self, backing_width: u32, backing_height: u32, scale: f32) -> ChartResult<()> {
        let (w, h) = (backing_width.max(1), backing_height.max(1));
        if self.backing_size() != (w, h) {
            self.surface = skia::surfaces::raster_n32_premul((w as i32, h as i32))
                .ok_or_else(|| ChartError::Surface(format!("failed to create {w}x{h} raster surface")))?;
            trace!(w, h, "reallocated raster surface");
        }
        self.scale = scale;
        Ok(())
    }

    fn clear(&mut self) {
        let scale = self.scale;
        let canvas = self.surface.canvas();
        canvas.reset_matrix();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.scale((scale, scale));
    }

    fn fill_rect(&mut self, rect: RectF, color: skia::Color) {
        let rect = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(rect, &fill_paint(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint.set_color(color);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn fill_polygon(&mut self, points: &[Point], color: skia::Color) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        path.close();
        self.surface.canvas().draw_path(&path, &fill_paint(color));
    }

    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, at.x, at.y, style);
    }
}
