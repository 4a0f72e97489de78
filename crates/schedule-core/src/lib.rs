// File: crates/schedule-core/src/lib.rs
// Summary: Core library entry point; exports the schedule chart component and its building blocks.

pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod input;
pub mod layout;
pub mod raster;
pub mod render;
pub mod scale;
pub mod schedule;
pub mod surface;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{ChartConfig, ChartEvent, ChartOptions, HeadlessTooltip, MountAnchors, ScheduleChart, TooltipOverlay};
pub use error::{ChartError, ChartResult};
pub use format::{month_label, year_label, NumberFormat};
pub use hover::{HoverTarget, TooltipContent};
pub use input::{format_with_spaces, parse_amount, RateField};
pub use layout::Geometry;
pub use raster::SkiaSurface;
pub use schedule::{Schedule, ScheduleRow};
pub use surface::{DrawSurface, RecordingSurface};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{Insets, Viewport};
