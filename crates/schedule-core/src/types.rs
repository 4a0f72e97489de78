// File: crates/schedule-core/src/types.rs
// Summary: Shared types and constants (container sizes, paddings).

use serde::{Deserialize, Serialize};

/// Default container width in CSS pixels.
pub const WIDTH: f32 = 960.0;
/// Default container height in CSS pixels.
pub const HEIGHT: f32 = 420.0;

/// Plot-area margins, in CSS pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Left leaves room for money axis labels, bottom for rotated year labels.
    fn default() -> Self {
        Self::new(70, 16, 12, 46)
    }
}

/// Container size in CSS pixels plus the device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self { width, height, pixel_ratio }
    }

    /// Pixel ratio with non-finite or non-positive values replaced by 1.0.
    pub fn effective_ratio(&self) -> f32 {
        if self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0 { self.pixel_ratio } else { 1.0 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, 1.0)
    }
}
