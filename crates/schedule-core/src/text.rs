// File: crates/schedule-core/src/text.rs
// Summary: Skia paragraph shaping for axis labels and tooltip lines; alignment and rotation around a baseline anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle};

use crate::surface::{TextAlign, TextStyle};

/// Tabular digits keep grouped amounts aligned in a column.
const NUMERIC_FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];
const LABEL_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

/// Ascent approximation used to turn the paragraph's top-left origin into a baseline.
const BASELINE_RATIO: f32 = 0.8;
/// Wide enough that no label or tooltip line ever wraps.
const MAX_LINE_WIDTH: f32 = 100_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    /// Single-line paragraph for `text`.
    pub fn layout(&self, text: &str, style: &TextStyle) -> Paragraph {
        let mut run = skia::textlayout::TextStyle::new();
        run.set_font_size(style.size.max(1.0));
        run.set_color(style.color);
        run.set_font_families(if style.mono_numeric { NUMERIC_FAMILIES } else { LABEL_FAMILIES });

        let mut builder = ParagraphBuilder::new(&ParagraphStyle::new(), &self.fonts);
        builder.push_style(&run);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(MAX_LINE_WIDTH);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let mut style = TextStyle::new(size, skia::Color::TRANSPARENT);
        style.mono_numeric = mono_numeric;
        self.layout(text, &style).longest_line()
    }

    /// Paint `text` with its baseline anchored at `(x, y)`. Alignment picks which
    /// end of the run sits on the anchor; rotation turns around the anchor.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, style: &TextStyle) {
        let mut paragraph = self.layout(text, style);
        let width = paragraph.longest_line();
        let dx = match style.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width * 0.5,
            TextAlign::Right => -width,
        };
        canvas.save();
        canvas.translate((x, y));
        if style.rotation_deg != 0.0 {
            canvas.rotate(style.rotation_deg, None);
        }
        paragraph.paint(canvas, (dx, -style.size * BASELINE_RATIO));
        canvas.restore();
    }
}
