use approx::assert_relative_eq;
use poet_timeline::api::{HoverState, TimelineChart, TimelineSnapshot};
use poet_timeline::core::ZoomLevel;
use poet_timeline::dataset::Era;
use poet_timeline::render::NullRenderer;

#[test]
fn snapshot_reports_state_and_geometry() {
    let mut chart =
        TimelineChart::with_builtin_dataset(NullRenderer::default()).expect("chart init");
    chart.set_zoom(ZoomLevel::new(2).expect("valid zoom"));
    let x = chart.map_year_to_pixel(800.0).expect("x map");
    chart.pointer_move(x, 120.0);

    let snapshot = chart.snapshot().expect("snapshot");
    assert_eq!(snapshot.zoom.get(), 2);
    assert_eq!(snapshot.width, 1500.0);
    assert_eq!(snapshot.height, 1024.0);
    assert_eq!(snapshot.year_domain, (630, 930));
    assert_eq!(snapshot.pixel_range, (20.0, 1300.0));
    assert_eq!(snapshot.hover, HoverState::Tracking(x));
    assert_eq!(snapshot.hover_year, Some(800));
    // y 120 falls in the band 116..144 of row 2.
    assert_eq!(snapshot.hovered_row, Some(2));
    assert_eq!(snapshot.ticks.len(), 31);
    assert_eq!(snapshot.bars.len(), 33);

    let du_fu = snapshot
        .bars
        .iter()
        .find(|bar| bar.name == "杜甫")
        .expect("du fu present");
    assert_eq!(du_fu.era, Era::High);
    assert_eq!(du_fu.color_hex, "#82C272");
    assert_eq!(du_fu.geometry.row, 14);
}

#[test]
fn legend_keeps_declaration_order() {
    let chart = TimelineChart::with_builtin_dataset(NullRenderer::default()).expect("chart init");
    let snapshot = chart.snapshot().expect("snapshot");
    let labels: Vec<&str> = snapshot.legend.keys().map(String::as_str).collect();
    assert_eq!(labels, vec!["初唐", "盛唐", "中唐", "晚唐"]);
    assert_eq!(snapshot.legend["中唐"], "#6CA6DB");
}

#[test]
fn snapshot_json_parses_back() {
    let chart = TimelineChart::with_builtin_dataset(NullRenderer::default()).expect("chart init");
    let json = chart.snapshot_json_pretty().expect("json");
    assert!(json.contains("\"hover\": {\n    \"state\": \"idle\"\n  }"));

    let parsed: TimelineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    let original = chart.snapshot().expect("snapshot");
    assert_eq!(parsed.zoom, original.zoom);
    assert_eq!(parsed.hover, HoverState::Idle);
    assert_eq!(parsed.ticks, original.ticks);
    assert_eq!(parsed.legend, original.legend);
    assert_eq!(parsed.bars.len(), original.bars.len());
    for (parsed_bar, bar) in parsed.bars.iter().zip(&original.bars) {
        assert_eq!(parsed_bar.id, bar.id);
        assert_eq!(parsed_bar.geometry.row, bar.geometry.row);
        assert_relative_eq!(parsed_bar.geometry.width, bar.geometry.width, epsilon = 1e-9);
    }
}
