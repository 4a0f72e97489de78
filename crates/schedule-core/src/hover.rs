// File: crates/schedule-core/src/hover.rs
// Summary: Hover resolver; maps a pointer position to a period and builds tooltip content/placement.

use crate::format::{month_label, NumberFormat};
use crate::geometry::{clamp, Point};
use crate::layout::Geometry;
use crate::render::max_payment;
use crate::schedule::{Schedule, ScheduleRow};

/// Gap kept between the tooltip box and the container edges.
pub const TOOLTIP_MARGIN: f32 = 8.0;
/// Vertical distance between the hovered point and the tooltip's bottom edge.
pub const TOOLTIP_OFFSET: f32 = 12.0;

/// Period under the pointer. Recomputed on every move, never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget<'a> {
    pub index: usize,
    pub row: &'a ScheduleRow,
    /// Anchor on the top of the stack, CSS pixels.
    pub point: Point,
}

/// Nearest period for a container-relative pointer X.
///
/// The X is shifted into plot space, clamped to `[0, plot_width]`, and mapped
/// with rounding, so positions past either edge resolve to the first/last period.
pub fn resolve<'a>(pointer_x: f32, geometry: &Geometry, schedule: &'a Schedule) -> Option<HoverTarget<'a>> {
    let xs = geometry.index_scale(schedule.len());
    let index = xs.from_px(pointer_x)?;
    let row = schedule.get(index)?;
    let ys = geometry.value_scale(max_payment(schedule));
    Some(HoverTarget {
        index,
        row,
        point: Point::new(xs.to_px(index), ys.to_px(row.payment())),
    })
}

/// The three text slots of the tooltip overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    /// `MM.YYYY`
    pub title: String,
    pub principal: String,
    pub interest: String,
}

pub fn tooltip_content(row: &ScheduleRow, format: &NumberFormat) -> TooltipContent {
    TooltipContent {
        title: month_label(&row.date),
        principal: format.money_with_currency(row.principal),
        interest: format.money_with_currency(row.interest),
    }
}

/// Top-left corner for a `size` tooltip: centered over `anchor`, above it, and
/// kept inside `container` with [`TOOLTIP_MARGIN`] on every side.
pub fn place_tooltip(anchor: Point, size: (f32, f32), container: (f32, f32)) -> Point {
    let (w, h) = size;
    let (cw, ch) = container;
    let max_left = (cw - w - TOOLTIP_MARGIN).max(TOOLTIP_MARGIN);
    let max_top = (ch - h - TOOLTIP_MARGIN).max(TOOLTIP_MARGIN);
    let left = clamp(anchor.x - w / 2.0, TOOLTIP_MARGIN, max_left);
    let top = clamp(anchor.y - h - TOOLTIP_OFFSET, TOOLTIP_MARGIN, max_top);
    Point::new(left, top)
}
