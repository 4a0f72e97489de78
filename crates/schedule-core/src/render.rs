// File: crates/schedule-core/src/render.rs
// Summary: Stateless full-surface renderer for the stacked principal/interest area chart.

use tracing::trace;

use crate::chart::ChartOptions;
use crate::error::ChartResult;
use crate::format::year_label;
use crate::geometry::Point;
use crate::grid::{linspace, vertical_grid_indices, year_label_indices, HORIZONTAL_LINES};
use crate::layout::Geometry;
use crate::schedule::Schedule;
use crate::surface::{DrawSurface, TextAlign, TextStyle};

/// Rotation of the year labels under the X axis.
pub const YEAR_LABEL_ROTATION_DEG: f32 = -30.0;

/// Vertical scale maximum: the tallest stacked payment, or 1 for an all-zero schedule.
pub fn max_payment(schedule: &Schedule) -> f64 {
    let max = schedule.max_payment();
    if max.is_finite() && max > 0.0 { max } else { 1.0 }
}

/// Upper edges of the two layers, one point per period.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedPoints {
    /// Height of interest alone.
    pub interest: Vec<Point>,
    /// Height of interest + principal.
    pub total: Vec<Point>,
}

pub fn stacked_points(schedule: &Schedule, geometry: &Geometry) -> StackedPoints {
    let xs = geometry.index_scale(schedule.len());
    let ys = geometry.value_scale(max_payment(schedule));
    let mut out = StackedPoints {
        interest: Vec::with_capacity(schedule.len()),
        total: Vec::with_capacity(schedule.len()),
    };
    for (i, row) in schedule.rows().iter().enumerate() {
        let x = xs.to_px(i);
        out.interest.push(Point::new(x, ys.to_px(row.interest)));
        out.total.push(Point::new(x, ys.to_px(row.interest + row.principal)));
    }
    out
}

/// Region between the baseline and the interest edge.
pub fn interest_polygon(points: &StackedPoints, baseline_y: f32) -> Vec<Point> {
    let (Some(first), Some(last)) = (points.interest.first(), points.interest.last()) else {
        return Vec::new();
    };
    let mut poly = Vec::with_capacity(points.interest.len() + 2);
    poly.push(Point::new(first.x, baseline_y));
    poly.extend(points.interest.iter().copied());
    poly.push(Point::new(last.x, baseline_y));
    poly
}

/// Region between the interest edge and the total edge: forward along total,
/// back along interest.
pub fn principal_polygon(points: &StackedPoints) -> Vec<Point> {
    let mut poly = Vec::with_capacity(points.total.len() * 2);
    poly.extend(points.total.iter().copied());
    poly.extend(points.interest.iter().rev().copied());
    poly
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub value: f64,
}

/// Evenly spaced horizontal gridlines, top (`max_value`) first, bottom (0) last.
pub fn horizontal_gridlines(geometry: &Geometry, max_value: f64) -> Vec<GridLine> {
    let ys = geometry.value_scale(max_value);
    linspace(max_value, 0.0, HORIZONTAL_LINES)
        .into_iter()
        .map(|value| GridLine { y: ys.to_px(value), value })
        .collect()
}

/// Clear and redraw the whole surface. An empty schedule draws nothing.
pub fn draw<S: DrawSurface + ?Sized>(
    surface: &mut S,
    schedule: &Schedule,
    geometry: &Geometry,
    opts: &ChartOptions,
) -> ChartResult<()> {
    surface.clear();
    if schedule.is_empty() {
        return Ok(());
    }
    let theme = &opts.theme;
    let n = schedule.len();
    let max = max_payment(schedule);
    let (left, top) = (geometry.plot_left(), geometry.plot_top());
    let (right, bottom) = (geometry.plot_right(), geometry.plot_bottom());

    // Background (plot area only)
    surface.fill_rect(geometry.plot_rect(), theme.plot_background);

    // Horizontal grid + money labels
    let label_style = TextStyle::new(opts.font_size, theme.axis_label).aligned(TextAlign::Right).numeric();
    for line in horizontal_gridlines(geometry, max) {
        surface.stroke_line(Point::new(left, line.y), Point::new(right, line.y), 1.0, theme.grid);
        if !opts.draw_labels {
            continue;
        }
        let label = opts.number_format.money_axis(line.value);
        surface.draw_text(&label, Point::new(left - 8.0, line.y + opts.font_size * 0.35), &label_style);
    }

    // Vertical grid, decimated
    let xs = geometry.index_scale(n);
    for i in vertical_grid_indices(n) {
        let x = xs.to_px(i);
        surface.stroke_line(Point::new(x, top), Point::new(x, bottom), 1.0, theme.grid);
    }

    // Layers: interest underneath, principal stacked on top
    let points = stacked_points(schedule, geometry);
    surface.fill_polygon(&interest_polygon(&points, bottom), theme.interest_fill);
    surface.fill_polygon(&principal_polygon(&points), theme.principal_fill);

    // X axis
    surface.stroke_line(Point::new(left, bottom), Point::new(right, bottom), 1.0, theme.axis_line);

    // Year labels
    if opts.draw_labels {
        let year_style = TextStyle::new(opts.font_size, theme.axis_label)
            .aligned(TextAlign::Right)
            .rotated(YEAR_LABEL_ROTATION_DEG);
        for index in year_label_indices(n) {
            let Some(row) = schedule.get(index) else { break };
            let at = Point::new(xs.to_px(index), bottom + opts.font_size + 6.0);
            surface.draw_text(&year_label(&row.date), at, &year_style);
        }
    }

    trace!(rows = n, max_payment = max, "chart redrawn");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleRow;
    use crate::types::{Insets, Viewport};

    fn geometry() -> Geometry {
        Geometry::compute(Viewport::new(486.0, 258.0, 1.0), Insets::default()).unwrap()
    }

    #[test]
    fn zero_schedule_uses_unit_scale() {
        let s = Schedule::new(vec![ScheduleRow::new("2025-01", 0.0, 0.0)]);
        assert_eq!(max_payment(&s), 1.0);
        let pts = stacked_points(&s, &geometry());
        assert!(pts.total.iter().all(Point::is_finite));
        assert_eq!(pts.total[0].y, geometry().plot_bottom());
    }

    #[test]
    fn principal_polygon_walks_back_along_interest() {
        let s = Schedule::new(vec![
            ScheduleRow::new("2025-01", 10.0, 90.0),
            ScheduleRow::new("2025-02", 20.0, 80.0),
            ScheduleRow::new("2025-03", 30.0, 70.0),
        ]);
        let pts = stacked_points(&s, &geometry());
        let poly = principal_polygon(&pts);
        assert_eq!(poly.len(), 6);
        assert_eq!(poly[0], pts.total[0]);
        assert_eq!(poly[2], pts.total[2]);
        assert_eq!(poly[3], pts.interest[2]);
        assert_eq!(poly[5], pts.interest[0]);
    }

    #[test]
    fn gridlines_run_top_to_bottom() {
        let g = geometry();
        let lines = horizontal_gridlines(&g, 400.0);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].value, 400.0);
        assert_eq!(lines[0].y, g.plot_top());
        assert_eq!(lines[2].value, 200.0);
        assert_eq!(lines[4].value, 0.0);
        assert_eq!(lines[4].y, g.plot_bottom());
    }
}
