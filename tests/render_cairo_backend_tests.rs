#![cfg(feature = "cairo-backend")]

use poet_timeline::api::TimelineChart;
use poet_timeline::render::{CairoRenderer, Color};

#[test]
fn cairo_renderer_resizes_surface_to_chart() {
    let mut chart = TimelineChart::with_builtin_dataset(CairoRenderer::new(1, 1).expect("surface"))
        .expect("chart init");
    chart.pointer_move(900.0, 200.0);
    chart.render().expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.surface().width(), 2400);
    assert_eq!(renderer.surface().height(), 1024);
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 65);
    assert_eq!(stats.rects_drawn, 34);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.texts_drawn, 65);
}

#[test]
fn cairo_renderer_writes_png() {
    let mut chart = TimelineChart::with_builtin_dataset(CairoRenderer::new(1, 1).expect("surface"))
        .expect("chart init");
    chart.render().expect("render");

    let path = std::env::temp_dir().join("poet-timeline-cairo-test.png");
    chart.renderer().write_png(&path).expect("write png");
    let bytes = std::fs::read(&path).expect("read png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    let _ = std::fs::remove_file(path);
}

#[test]
fn clear_color_is_validated() {
    let mut renderer = CairoRenderer::new(10, 10).expect("surface");
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
    assert!(CairoRenderer::new(0, 10).is_err());
}
