// File: crates/schedule-core/src/layout.rs
// Summary: Layout engine; derives plot geometry from container size and device pixel ratio.

use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::scale::{IndexScale, ValueScale};
use crate::surface::DrawSurface;
use crate::types::{Insets, Viewport};

/// Pixel geometry for one container size. Recomputed on every resize, never patched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Container size in CSS pixels.
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
    /// Backing store size in device pixels.
    pub backing_width: u32,
    pub backing_height: u32,
    pub padding: Insets,
    pub plot_width: f32,
    pub plot_height: f32,
}

impl Geometry {
    /// Pure function of the viewport and padding.
    pub fn compute(viewport: Viewport, padding: Insets) -> ChartResult<Self> {
        let (w, h) = (viewport.width, viewport.height);
        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return Err(ChartError::InvalidViewport { width: w, height: h });
        }
        let ratio = viewport.effective_ratio();
        Ok(Self {
            css_width: w,
            css_height: h,
            pixel_ratio: ratio,
            backing_width: ((w * ratio).round() as u32).max(1),
            backing_height: ((h * ratio).round() as u32).max(1),
            padding,
            plot_width: (w - padding.hsum() as f32).max(0.0),
            plot_height: (h - padding.vsum() as f32).max(0.0),
        })
    }

    pub fn plot_left(&self) -> f32 { self.padding.left as f32 }
    pub fn plot_top(&self) -> f32 { self.padding.top as f32 }
    pub fn plot_right(&self) -> f32 { self.plot_left() + self.plot_width }
    pub fn plot_bottom(&self) -> f32 { self.plot_top() + self.plot_height }

    pub fn plot_rect(&self) -> RectF {
        RectF::from_ltwh(self.plot_left(), self.plot_top(), self.plot_width, self.plot_height)
    }

    /// X mapping for a schedule of `count` periods.
    pub fn index_scale(&self, count: usize) -> IndexScale {
        IndexScale::new(self.plot_left(), self.plot_width, count)
    }

    /// Y mapping with `max_value` at the top of the plot and zero on the baseline.
    pub fn value_scale(&self, max_value: f64) -> ValueScale {
        ValueScale::new_linear(self.plot_top(), self.plot_bottom(), 0.0, max_value)
    }
}

/// Size the surface's backing store for `viewport` and return the new geometry.
/// Drawing after this call uses CSS-pixel coordinates.
pub fn resize<S: DrawSurface + ?Sized>(viewport: Viewport, padding: Insets, surface: &mut S) -> ChartResult<Geometry> {
    let geometry = Geometry::compute(viewport, padding)?;
    surface.set_resolution(geometry.backing_width, geometry.backing_height, geometry.pixel_ratio)?;
    trace!(
        css_w = geometry.css_width,
        css_h = geometry.css_height,
        ratio = geometry.pixel_ratio,
        "layout resized"
    );
    Ok(geometry)
}
