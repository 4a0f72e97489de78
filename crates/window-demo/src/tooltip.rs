// File: crates/window-demo/src/tooltip.rs
// Summary: Tooltip overlay rendered to its own small Skia raster and composited over the chart.

use anyhow::Result;
use schedule_core::geometry::{Point, RectF};
use schedule_core::surface::{DrawSurface, TextStyle};
use schedule_core::{SkiaSurface, TextShaper, Theme, TooltipContent, TooltipOverlay};

const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 18.0;
const PAD: f32 = 10.0;

pub struct WindowTooltip {
    content: Option<TooltipContent>,
    position: Point,
    visible: bool,
    size: (f32, f32),
    shaper: TextShaper,
    theme: Theme,
    raster: SkiaSurface,
    /// Cached RGBA of the painted box: (pixels, width, height).
    pixels: Option<(Vec<u8>, u32, u32)>,
}

impl WindowTooltip {
    pub fn new(theme: Theme) -> Result<Self> {
        Ok(Self {
            content: None,
            position: Point::default(),
            visible: false,
            size: (0.0, 0.0),
            shaper: TextShaper::new(),
            theme,
            raster: SkiaSurface::new()?,
            pixels: None,
        })
    }

    pub fn is_visible(&self) -> bool { self.visible && self.content.is_some() }

    pub fn position(&self) -> Point { self.position }

    fn lines(content: &TooltipContent) -> [String; 3] {
        [
            content.title.clone(),
            format!("Principal: {}", content.principal),
            format!("Interest: {}", content.interest),
        ]
    }

    /// Paint the box at `pixel_ratio` (cached until the content or ratio changes).
    pub fn rgba(&mut self, pixel_ratio: f32) -> Result<Option<&(Vec<u8>, u32, u32)>> {
        let Some(content) = &self.content else { return Ok(None) };
        let (w, h) = self.size;
        let bw = (w * pixel_ratio).round().max(1.0) as u32;
        let bh = (h * pixel_ratio).round().max(1.0) as u32;
        let stale = self.pixels.as_ref().map_or(true, |(_, pw, ph)| (*pw, *ph) != (bw, bh));
        if stale {
            let lines = Self::lines(content);
            let theme = self.theme;
            let surface = &mut self.raster;
            surface.set_resolution(bw, bh, pixel_ratio)?;
            surface.clear();
            surface.fill_rect(RectF::from_ltwh(0.0, 0.0, w, h), theme.tooltip_background);
            let corners = [
                Point::new(0.5, 0.5),
                Point::new(w - 0.5, 0.5),
                Point::new(w - 0.5, h - 0.5),
                Point::new(0.5, h - 0.5),
            ];
            for i in 0..corners.len() {
                let next = corners[(i + 1) % corners.len()];
                surface.stroke_line(corners[i], next, 1.0, theme.tooltip_border);
            }
            for (i, line) in lines.iter().enumerate() {
                let mut style = TextStyle::new(FONT_SIZE, theme.tooltip_text);
                if i > 0 {
                    style = style.numeric();
                }
                let baseline = PAD + FONT_SIZE + i as f32 * LINE_HEIGHT;
                surface.draw_text(line, Point::new(PAD, baseline), &style);
            }
            self.pixels = Some(surface.to_rgba8()?);
        }
        Ok(self.pixels.as_ref())
    }
}

impl TooltipOverlay for WindowTooltip {
    fn set_content(&mut self, content: &TooltipContent) {
        if self.content.as_ref() == Some(content) {
            return;
        }
        let lines = Self::lines(content);
        let widest = lines
            .iter()
            .enumerate()
            .map(|(i, l)| self.shaper.measure_width(l, FONT_SIZE, i > 0))
            .fold(0.0f32, f32::max);
        self.size = ((widest + 2.0 * PAD).ceil(), (2.0 * PAD + 3.0 * LINE_HEIGHT).ceil());
        self.content = Some(content.clone());
        self.pixels = None;
    }

    fn size(&self) -> (f32, f32) { self.size }

    fn set_position(&mut self, top_left: Point) { self.position = top_left; }

    fn set_visible(&mut self, visible: bool) { self.visible = visible; }
}
