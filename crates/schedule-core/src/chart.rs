// File: crates/schedule-core/src/chart.rs
// Summary: ScheduleChart component; explicit mount, resize/redraw pipeline, and hover-driven tooltip.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::ChartResult;
use crate::format::NumberFormat;
use crate::geometry::Point;
use crate::hover::{place_tooltip, resolve, tooltip_content, TooltipContent};
use crate::layout::{self, Geometry};
use crate::render;
use crate::schedule::Schedule;
use crate::surface::DrawSurface;
use crate::theme::{self, Theme};
use crate::types::{Insets, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub insets: Insets,
    pub theme: Theme,
    pub number_format: NumberFormat,
    /// Axis label size in CSS pixels.
    pub font_size: f32,
    /// Off in golden tests to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::default(),
            number_format: NumberFormat::default(),
            font_size: 11.0,
            draw_labels: true,
        }
    }
}

/// Serializable form of [`ChartOptions`]; the theme is referenced by preset name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub insets: Option<Insets>,
    pub theme: Option<String>,
    pub number_format: Option<NumberFormat>,
    pub font_size: Option<f32>,
    pub draw_labels: Option<bool>,
}

impl ChartConfig {
    pub fn from_json(text: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn into_options(self) -> ChartOptions {
        let defaults = ChartOptions::default();
        ChartOptions {
            insets: self.insets.unwrap_or(defaults.insets),
            theme: self.theme.as_deref().map_or(defaults.theme, theme::find),
            number_format: self.number_format.unwrap_or(defaults.number_format),
            font_size: self.font_size.filter(|s| s.is_finite() && *s > 0.0).unwrap_or(defaults.font_size),
            draw_labels: self.draw_labels.unwrap_or(defaults.draw_labels),
        }
    }
}

/// Overlay showing the hovered period. Lives outside the chart raster.
pub trait TooltipOverlay {
    fn set_content(&mut self, content: &TooltipContent);
    /// Box size in CSS pixels for the current content.
    fn size(&self) -> (f32, f32);
    fn set_position(&mut self, top_left: Point);
    fn set_visible(&mut self, visible: bool);
}

/// Tooltip that just keeps its state; fixed box size.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessTooltip {
    pub content: Option<TooltipContent>,
    pub position: Point,
    pub visible: bool,
    pub box_size: (f32, f32),
}

impl Default for HeadlessTooltip {
    fn default() -> Self {
        Self { content: None, position: Point::default(), visible: false, box_size: (160.0, 64.0) }
    }
}

impl TooltipOverlay for HeadlessTooltip {
    fn set_content(&mut self, content: &TooltipContent) { self.content = Some(content.clone()); }
    fn size(&self) -> (f32, f32) { self.box_size }
    fn set_position(&mut self, top_left: Point) { self.position = top_left; }
    fn set_visible(&mut self, visible: bool) { self.visible = visible; }
}

/// Host events delivered to the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartEvent {
    Resize(Viewport),
    /// Container-relative CSS pixels.
    PointerMove { x: f32, y: f32 },
    PointerLeave,
}

/// Host handles the chart attaches to. Either may be absent on pages without a chart.
pub struct MountAnchors<S, T> {
    pub surface: Option<S>,
    pub tooltip: Option<T>,
}

pub struct ScheduleChart<S, T> {
    schedule: Arc<Schedule>,
    surface: S,
    tooltip: T,
    options: ChartOptions,
    geometry: Geometry,
}

impl<S: DrawSurface, T: TooltipOverlay> ScheduleChart<S, T> {
    /// Build the chart and perform the initial resize + draw.
    pub fn new(
        schedule: Arc<Schedule>,
        surface: S,
        mut tooltip: T,
        viewport: Viewport,
        options: ChartOptions,
    ) -> ChartResult<Self> {
        let mut surface = surface;
        let geometry = layout::resize(viewport, options.insets, &mut surface)?;
        tooltip.set_visible(false);
        let mut chart = Self { schedule, surface, tooltip, options, geometry };
        chart.redraw()?;
        debug!(rows = chart.schedule.len(), "schedule chart mounted");
        Ok(chart)
    }

    /// Mount from raw JSON and optional anchors. Any missing piece makes this a
    /// no-op returning `None`; nothing is surfaced to the caller.
    pub fn mount(anchors: MountAnchors<S, T>, data: Option<&str>, viewport: Viewport, options: ChartOptions) -> Option<Self> {
        let (Some(surface), Some(tooltip)) = (anchors.surface, anchors.tooltip) else {
            debug!("chart anchors missing; skipping mount");
            return None;
        };
        let Some(data) = data else {
            debug!("schedule data missing; skipping mount");
            return None;
        };
        let schedule = match Schedule::from_json(data) {
            Ok(s) if !s.is_empty() => s,
            Ok(_) => {
                debug!("schedule is empty; skipping mount");
                return None;
            }
            Err(err) => {
                debug!(%err, "schedule data unusable; skipping mount");
                return None;
            }
        };
        match Self::new(Arc::new(schedule), surface, tooltip, viewport, options) {
            Ok(chart) => Some(chart),
            Err(err) => {
                warn!(%err, "schedule chart failed to initialize");
                None
            }
        }
    }

    pub fn handle_event(&mut self, event: ChartEvent) -> ChartResult<()> {
        match event {
            ChartEvent::Resize(viewport) => self.resize(viewport),
            ChartEvent::PointerMove { x, .. } => {
                self.pointer_move(x);
                Ok(())
            }
            ChartEvent::PointerLeave => {
                self.pointer_leave();
                Ok(())
            }
        }
    }

    /// Recompute geometry for the new container size and redraw everything.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.geometry = layout::resize(viewport, self.options.insets, &mut self.surface)?;
        self.redraw()
    }

    pub fn redraw(&mut self) -> ChartResult<()> {
        render::draw(&mut self.surface, &self.schedule, &self.geometry, &self.options)
    }

    /// Update the tooltip for a pointer at container-relative `x`.
    /// Returns the hovered period, or `None` (tooltip hidden) when nothing is under it.
    pub fn pointer_move(&mut self, x: f32) -> Option<usize> {
        let Some(target) = resolve(x, &self.geometry, &self.schedule) else {
            self.tooltip.set_visible(false);
            return None;
        };
        let content = tooltip_content(target.row, &self.options.number_format);
        self.tooltip.set_content(&content);
        let container = (self.geometry.css_width, self.geometry.css_height);
        let top_left = place_tooltip(target.point, self.tooltip.size(), container);
        self.tooltip.set_position(top_left);
        self.tooltip.set_visible(true);
        trace!(index = target.index, "hover");
        Some(target.index)
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip.set_visible(false);
    }

    pub fn geometry(&self) -> &Geometry { &self.geometry }
    pub fn schedule(&self) -> &Arc<Schedule> { &self.schedule }
    pub fn options(&self) -> &ChartOptions { &self.options }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn tooltip(&self) -> &T { &self.tooltip }
    pub fn tooltip_mut(&mut self) -> &mut T { &mut self.tooltip }
}
