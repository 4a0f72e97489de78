// File: crates/schedule-core/tests/mount.rs
// Purpose: Mount contract, resize/redraw pipeline, and hover-driven tooltip using the recording surface.

use std::sync::Arc;

use schedule_core::surface::DrawCommand;
use schedule_core::{
    ChartEvent, ChartOptions, HeadlessTooltip, MountAnchors, NumberFormat, RecordingSurface, Schedule,
    ScheduleChart, ScheduleRow, Viewport,
};

type Chart = ScheduleChart<RecordingSurface, HeadlessTooltip>;

const DATA: &str = r#"[
    {"date": "2025-03", "principal": 1000.0, "interest": 234.56},
    {"date": "2025-04", "principal": 1010.0, "interest": 224.56},
    {"date": "2025-05", "principal": 1020.0, "interest": 214.56}
]"#;

fn anchors() -> MountAnchors<RecordingSurface, HeadlessTooltip> {
    MountAnchors { surface: Some(RecordingSurface::new()), tooltip: Some(HeadlessTooltip::default()) }
}

fn viewport() -> Viewport {
    Viewport::new(486.0, 258.0, 1.0)
}

fn mount(data: &str) -> Chart {
    Chart::mount(anchors(), Some(data), viewport(), ChartOptions::default()).expect("chart should mount")
}

fn months(n: usize) -> Schedule {
    Schedule::new(
        (0..n)
            .map(|i| ScheduleRow::new(format!("{:04}-{:02}", 2025 + i / 12, i % 12 + 1), 500.0 + i as f64, 400.0))
            .collect(),
    )
}

#[test]
fn missing_anchor_is_a_no_op() {
    let no_surface = MountAnchors::<RecordingSurface, HeadlessTooltip> { surface: None, tooltip: Some(HeadlessTooltip::default()) };
    assert!(Chart::mount(no_surface, Some(DATA), viewport(), ChartOptions::default()).is_none());

    let no_tooltip = MountAnchors::<RecordingSurface, HeadlessTooltip> { surface: Some(RecordingSurface::new()), tooltip: None };
    assert!(Chart::mount(no_tooltip, Some(DATA), viewport(), ChartOptions::default()).is_none());
}

#[test]
fn unusable_data_is_a_no_op() {
    for data in [None, Some("[]"), Some("{}"), Some("not json"), Some(r#"[{"date": "2025-01"}]"#)] {
        assert!(Chart::mount(anchors(), data, viewport(), ChartOptions::default()).is_none(), "{data:?}");
    }
}

#[test]
fn mount_draws_once_with_finite_geometry() {
    let chart = mount(DATA);
    let surface = chart.surface();
    surface.validate().expect("no NaN/inf in drawing");
    assert_eq!(surface.backing_size, (486, 258));
    assert_eq!(surface.commands.iter().filter(|c| matches!(c, DrawCommand::Clear)).count(), 1);
    assert!(!chart.tooltip().visible);
}

#[test]
fn gridline_labels_span_max_payment_to_zero() {
    let chart = mount(DATA);
    let texts = chart.surface().texts();
    let fmt = NumberFormat::default();
    // Max payment is 1 234.56 (first row)
    assert_eq!(texts[0], fmt.money_axis(1234.56));
    assert_eq!(texts[0], "1 235");
    assert_eq!(texts[4], fmt.money_axis(0.0));
    // One year label for a three-month schedule
    assert_eq!(&texts[5..], ["2025"]);
}

#[test]
fn interest_layer_is_drawn_below_principal() {
    let chart = mount(DATA);
    let bottom = chart.geometry().plot_bottom();
    let frame = chart.surface().frame();
    let polys: Vec<_> = frame
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polygon { points, color } => Some((points.clone(), *color)),
            _ => None,
        })
        .collect();
    assert_eq!(polys.len(), 2);
    assert_eq!(chart.surface().polygons(), [polys[0].0.as_slice(), polys[1].0.as_slice()]);
    let (interest, interest_color) = &polys[0];
    let (principal, principal_color) = &polys[1];
    assert_eq!(*interest_color, chart.options().theme.interest_fill);
    assert_eq!(*principal_color, chart.options().theme.principal_fill);
    // Interest polygon closes on the baseline, principal one never touches it
    assert_eq!(interest.first().unwrap().y, bottom);
    assert_eq!(interest.last().unwrap().y, bottom);
    assert!(principal.iter().all(|p| p.y < bottom));
}

#[test]
fn long_schedule_decimates_grid_and_years() {
    let chart = Chart::new(
        Arc::new(months(360)),
        RecordingSurface::new(),
        HeadlessTooltip::default(),
        viewport(),
        ChartOptions::default(),
    )
    .unwrap();
    // 5 horizontal + 24 vertical gridlines + the X axis
    assert_eq!(chart.surface().lines().len(), 30);
    let years: Vec<_> = chart.surface().texts().into_iter().skip(5).collect();
    assert_eq!(years, ["2025", "2029", "2033", "2037", "2041", "2045", "2049", "2053"]);
}

#[test]
fn resize_is_idempotent() {
    let mut chart = mount(DATA);
    let before_geometry = *chart.geometry();
    let before_frame = chart.surface().frame().to_vec();

    chart.handle_event(ChartEvent::Resize(viewport())).unwrap();
    chart.handle_event(ChartEvent::Resize(viewport())).unwrap();
    assert_eq!(*chart.geometry(), before_geometry);
    assert_eq!(chart.surface().frame(), before_frame.as_slice());

    chart.handle_event(ChartEvent::Resize(Viewport::new(800.0, 400.0, 1.5))).unwrap();
    assert_eq!(chart.surface().backing_size, (1200, 600));
    assert_eq!(chart.geometry().plot_width, 800.0 - 86.0);
}

#[test]
fn hover_shows_and_leave_hides_tooltip() {
    let mut chart = mount(DATA);
    let g = *chart.geometry();

    chart.handle_event(ChartEvent::PointerMove { x: g.plot_left() - 30.0, y: 50.0 }).unwrap();
    let tip = chart.tooltip();
    assert!(tip.visible);
    let content = tip.content.as_ref().unwrap();
    assert_eq!(content.title, "03.2025");
    assert_eq!(content.principal, "1 000.00 ₽");
    assert_eq!(content.interest, "234.56 ₽");

    // Tooltip box stays inside the container with the 8px margin
    let (w, h) = tip.box_size;
    assert!(tip.position.x >= 8.0 && tip.position.x + w <= g.css_width - 8.0);
    assert!(tip.position.y >= 8.0 && tip.position.y + h <= g.css_height - 8.0);

    assert_eq!(chart.pointer_move(g.plot_right() + 100.0), Some(2));
    assert_eq!(chart.tooltip().content.as_ref().unwrap().title, "05.2025");

    chart.handle_event(ChartEvent::PointerLeave).unwrap();
    assert!(!chart.tooltip().visible);
}

#[test]
fn single_row_always_resolves_to_first_period() {
    let mut chart = mount(r#"[{"date": "2040-12", "principal": 10, "interest": 5}]"#);
    chart.surface().validate().unwrap();
    for x in [-100.0, 0.0, 70.0, 200.0, 400.0, 10_000.0] {
        assert_eq!(chart.pointer_move(x), Some(0));
    }
}

#[test]
fn sub_pixel_plot_hover_reaches_both_ends() {
    // 86.5 CSS px wide leaves half a pixel of plot between the 70/16 insets
    let mut chart =
        Chart::mount(anchors(), Some(DATA), Viewport::new(86.5, 258.0, 1.0), ChartOptions::default()).unwrap();
    assert_eq!(chart.geometry().plot_width, 0.5);
    assert_eq!(chart.pointer_move(0.0), Some(0));
    assert_eq!(chart.pointer_move(chart.geometry().plot_right()), Some(2));
    assert_eq!(chart.pointer_move(1000.0), Some(2));
}

#[test]
fn all_zero_schedule_draws_finite_coordinates() {
    let chart = mount(r#"[{"date": "2025-01", "principal": 0, "interest": 0}, {"date": "2025-02", "principal": 0, "interest": 0}]"#);
    chart.surface().validate().unwrap();
    // Unit scale: top label is "1"
    assert_eq!(chart.surface().texts()[0], "1");
}

#[test]
fn empty_schedule_via_constructor_draws_nothing() {
    let mut chart = Chart::new(
        Arc::new(Schedule::default()),
        RecordingSurface::new(),
        HeadlessTooltip::default(),
        viewport(),
        ChartOptions::default(),
    )
    .unwrap();
    assert!(chart.surface().frame().is_empty());
    assert_eq!(chart.pointer_move(100.0), None);
    assert!(!chart.tooltip().visible);
}
