// File: crates/schedule-core/src/scale.rs
// Summary: Index (X) and Value (Y) scale transforms between schedule space and CSS pixels.

/// Horizontal scale spreading `count` evenly spaced periods across `width_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f32,
    pub width_px: f32,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f32, width_px: f32, count: usize) -> Self {
        Self { left_px, width_px: width_px.max(0.0), count }
    }

    /// Denominator for index math; a single period maps onto the left edge.
    #[inline]
    fn last_index(&self) -> f32 {
        self.count.saturating_sub(1).max(1) as f32
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        self.left_px + self.width_px * index as f32 / self.last_index()
    }

    /// Nearest period for a pixel, clamped into the plot and rounded (not floored).
    /// Returns `None` when there are no periods.
    pub fn from_px(&self, px: f32) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let rel = if px.is_finite() { (px - self.left_px).clamp(0.0, self.width_px) } else { 0.0 };
        let frac = if self.width_px > 0.0 { rel / self.width_px } else { 0.0 };
        let index = (frac * self.count.saturating_sub(1) as f32).round() as usize;
        Some(index.min(self.count - 1))
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// A zero or non-finite span is widened to 1 so no NaN reaches drawing code.
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if !(s.vmax - s.vmin).is_finite() || (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
}
