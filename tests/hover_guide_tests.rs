use approx::assert_abs_diff_eq;
use poet_timeline::api::{HoverState, TimelineChart};
use poet_timeline::core::ZoomLevel;
use poet_timeline::render::{CanvasLayerKind, LinePrimitive, LineStrokeStyle, NullRenderer};

fn builtin_chart() -> TimelineChart<NullRenderer> {
    TimelineChart::with_builtin_dataset(NullRenderer::default()).expect("chart init")
}

#[test]
fn pointer_move_shows_guide_with_rounded_year() {
    let mut chart = builtin_chart();
    let x = chart.map_year_to_pixel(701.0).expect("x map");
    chart.pointer_move(x, 300.0);

    assert_eq!(chart.hover_state(), HoverState::Tracking(x));
    assert_eq!(chart.hover_year().expect("hover year"), Some(701));

    let frame = chart.build_layered_render_frame().expect("frame");
    let guide = frame.layer(CanvasLayerKind::Guide).expect("guide layer");
    assert_eq!(guide.lines.len(), 1);
    assert_eq!(guide.rects.len(), 1);
    assert_eq!(guide.polygons.len(), 1);
    assert_eq!(guide.texts.len(), 1);

    let line = guide.lines[0];
    assert_eq!((line.x1, line.x2), (x, x));
    assert_eq!((line.y1, line.y2), (50.0, 1024.0));
    assert_eq!(line.color.to_hex(), "#DC2626");
    assert_eq!(guide.texts[0].text(), "701");
}

#[test]
fn guide_tag_sits_above_axis_centered_on_pointer() {
    let mut chart = builtin_chart();
    chart.pointer_move(500.0, 10.0);

    let frame = chart.build_layered_render_frame().expect("frame");
    let guide = frame.layer(CanvasLayerKind::Guide).expect("guide layer");
    let tag = guide.rects[0];
    assert_eq!((tag.x, tag.y, tag.width, tag.height), (476.0, 18.0, 48.0, 20.0));
    assert_eq!(tag.corner_radius, 4.0);

    let arrow = &guide.polygons[0];
    assert_eq!(arrow.points.as_slice(), &[(496.0, 38.0), (500.0, 42.0), (504.0, 38.0)]);
    assert_eq!(guide.texts[0].y, 32.0);
    assert_eq!(guide.texts[0].segments[0].color.to_hex(), "#FFFFFF");
}

#[test]
fn repeated_move_to_same_x_is_idempotent() {
    let mut chart = builtin_chart();
    chart.pointer_move(812.0, 120.0);
    let first = chart.build_layered_render_frame().expect("frame");

    chart.pointer_move(812.0, 120.0);
    let second = chart.build_layered_render_frame().expect("frame");

    assert_eq!(first, second);
    let guide = second.layer(CanvasLayerKind::Guide).expect("guide layer");
    assert_eq!(guide.lines.len(), 1);
}

#[test]
fn only_latest_move_is_drawn() {
    let mut chart = builtin_chart();
    for x in [100.0, 400.0, 900.0] {
        chart.pointer_move(x, 200.0);
    }
    let frame = chart.build_layered_render_frame().expect("frame");
    let guide = frame.layer(CanvasLayerKind::Guide).expect("guide layer");
    assert_eq!(guide.lines.len(), 1);
    assert_eq!(guide.lines[0].x1, 900.0);
}

#[test]
fn pointer_leave_removes_every_guide_primitive() {
    let mut chart = builtin_chart();
    let idle = chart.build_render_frame().expect("idle frame");

    chart.pointer_move(300.0, 200.0);
    chart.pointer_move(600.0, 220.0);
    chart.pointer_leave();

    assert_eq!(chart.hover_state(), HoverState::Idle);
    assert_eq!(chart.hover_year().expect("hover year"), None);
    let frame = chart.build_layered_render_frame().expect("frame");
    assert!(frame.layer(CanvasLayerKind::Guide).expect("guide layer").is_empty());
    assert_eq!(frame.flatten(), idle);
}

#[test]
fn readout_follows_zoom_for_fixed_pointer() {
    let mut chart = builtin_chart();
    chart.pointer_move(1110.0, 100.0);
    let at_default = chart.hover_year().expect("hover year").expect("tracking");

    chart.set_zoom(ZoomLevel::MIN);
    let at_min = chart.hover_year().expect("hover year").expect("tracking");

    assert!(at_min > at_default);
    assert_abs_diff_eq!(
        chart.map_pixel_to_year(1110.0).expect("year"),
        630.0 + (1110.0 - 20.0) / 980.0 * 300.0,
        epsilon = 1e-9
    );
}

#[test]
fn guide_outside_plot_range_still_reads_out_extrapolated_year() {
    let mut chart = builtin_chart();
    chart.pointer_move(2350.0, 100.0);
    let year = chart.hover_year().expect("hover year").expect("tracking");
    assert!(year > 930);
}

fn entity_lines(chart: &TimelineChart<NullRenderer>) -> Vec<LinePrimitive> {
    chart
        .build_layered_render_frame()
        .expect("frame")
        .layer(CanvasLayerKind::Entities)
        .expect("entities layer")
        .lines
        .clone()
}

#[test]
fn hovered_row_gets_dashed_accent_in_era_color() {
    let mut chart = builtin_chart();
    // Row 14 (杜甫, 712-770) bar spans 462..470.
    chart.pointer_move(900.0, 466.0);
    assert_eq!(chart.hovered_row(), Some(14));

    let lines = entity_lines(&chart);
    assert_eq!(lines.len(), 1);
    let accent = lines[0];
    let x_start = chart.map_year_to_pixel(712.0).expect("x map");
    assert_eq!((accent.x1, accent.x2), (x_start, x_start));
    assert_eq!((accent.y1, accent.y2), (50.0, 466.0));
    assert_eq!(accent.color.to_hex(), "#82C272");
    assert_abs_diff_eq!(accent.color.alpha, 0.4, epsilon = 1e-12);
    assert_eq!(
        accent.stroke_style,
        LineStrokeStyle::Dashed {
            on_px: 2.0,
            off_px: 2.0
        }
    );
}

#[test]
fn accent_follows_pointer_between_rows() {
    let mut chart = builtin_chart();
    chart.pointer_move(900.0, 74.0);
    assert_eq!(chart.hovered_row(), Some(0));

    chart.pointer_move(900.0, 102.0);
    assert_eq!(chart.hovered_row(), Some(1));
    let lines = entity_lines(&chart);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].y2, 50.0 + 20.0 + 28.0 + 4.0);
}

#[test]
fn pointer_outside_rows_draws_no_accent() {
    let mut chart = builtin_chart();
    chart.pointer_move(900.0, 30.0);
    assert_eq!(chart.hovered_row(), None);
    assert!(entity_lines(&chart).is_empty());

    chart.pointer_move(900.0, 1010.0);
    assert_eq!(chart.hovered_row(), None);
    assert!(entity_lines(&chart).is_empty());

    chart.pointer_move(900.0, 466.0);
    chart.pointer_leave();
    assert_eq!(chart.hovered_row(), None);
    assert!(entity_lines(&chart).is_empty());
}
