// File: crates/schedule-core/src/theme.rs
// Summary: Light/Dark theming for the schedule chart colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Fill behind the plot area only; axis margins stay transparent.
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    /// Bottom layer.
    pub interest_fill: skia::Color,
    /// Top layer, stacked on interest.
    pub principal_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            plot_background: skia::Color::from_argb(255, 248, 250, 252),
            grid: skia::Color::from_argb(255, 226, 232, 240),
            axis_line: skia::Color::from_argb(255, 100, 116, 139),
            axis_label: skia::Color::from_argb(255, 71, 85, 105),
            interest_fill: skia::Color::from_argb(140, 239, 68, 68),
            principal_fill: skia::Color::from_argb(140, 37, 99, 235),
            tooltip_background: skia::Color::from_argb(240, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 203, 213, 225),
            tooltip_text: skia::Color::from_argb(255, 15, 23, 42),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            plot_background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            interest_fill: skia::Color::from_argb(150, 220, 80, 80),
            principal_fill: skia::Color::from_argb(150, 64, 160, 255),
            tooltip_background: skia::Color::from_argb(235, 30, 30, 36),
            tooltip_border: skia::Color::from_argb(255, 90, 90, 100),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            plot_background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),            // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),       // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),      // base03
            interest_fill: skia::Color::from_argb(140, 0xdc, 0x32, 0x2f),   // red
            principal_fill: skia::Color::from_argb(140, 0x26, 0x8b, 0xd2),  // blue
            tooltip_background: skia::Color::from_argb(240, 0xfd, 0xf6, 0xe3),
            tooltip_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            tooltip_text: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
