use poet_timeline::api::TimelineChart;
use poet_timeline::core::Viewport;
use poet_timeline::dataset::{Dataset, Era, Poet, TimelineLayout};
use poet_timeline::render::{
    Color, LinePrimitive, RenderFrame, Renderer, SvgRenderer, TextHAlign, TextPrimitive,
};

fn rendered_chart(hover_x: Option<f64>) -> TimelineChart<SvgRenderer> {
    let mut chart =
        TimelineChart::with_builtin_dataset(SvgRenderer::new()).expect("chart init");
    if let Some(x) = hover_x {
        chart.pointer_move(x, 100.0);
    }
    chart.render().expect("render");
    chart
}

#[test]
fn document_has_root_size_and_layer_groups() {
    let chart = rendered_chart(None);
    let svg = chart.renderer().document();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"2400\" height=\"1024\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("<g class=\"grid-layer\">"));
    assert!(svg.contains("<g class=\"axis-layer\">"));
    assert!(svg.contains("<g class=\"poets-layer\">"));
    assert!(!svg.contains("guide-layer"));
}

#[test]
fn layers_are_emitted_bottom_to_top() {
    let chart = rendered_chart(Some(700.0));
    let svg = chart.renderer().document();

    let grid = svg.find("grid-layer").expect("grid");
    let axis = svg.find("axis-layer").expect("axis");
    let poets = svg.find("poets-layer").expect("poets");
    let guide = svg.find("guide-layer").expect("guide");
    assert!(grid < axis && axis < poets && poets < guide);
    assert!(svg.contains("stroke=\"#DC2626\""));
    assert!(svg.contains("stroke-dasharray=\"4 4\""));
    assert!(svg.contains("stroke-opacity=\"0.4\" stroke-dasharray=\"2 2\""));
}

#[test]
fn stats_match_frame_counts() {
    let chart = rendered_chart(Some(700.0));
    let stats = chart.renderer().last_stats();
    assert_eq!(stats.lines_drawn, 65);
    assert_eq!(stats.rects_drawn, 34);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.texts_drawn, 65);
}

#[test]
fn labels_are_escaped_and_split_into_tspans() {
    let poets = vec![Poet::new("1", "A&B", "<quoted> \"text\"", 700, 760, Era::High)];
    let mut chart = TimelineChart::new(
        SvgRenderer::new(),
        Dataset::new(TimelineLayout::default(), poets),
    )
    .expect("chart init");
    chart.render().expect("render");
    let svg = chart.renderer().document();

    assert!(svg.contains("<tspan font-weight=\"700\" fill=\"#1F2937\">A&amp;B</tspan>"));
    assert!(svg.contains(
        "<tspan font-weight=\"300\" fill=\"#6B7280\" dx=\"8\">&lt;quoted&gt; &quot;text&quot;</tspan>"
    ));
    assert!(svg.contains("fill=\"#82C272\""));
    assert!(svg.contains("rx=\"4\""));
}

#[test]
fn flat_render_writes_primitives_without_groups() {
    let frame = RenderFrame::new(Viewport::new(100, 40))
        .with_line(LinePrimitive::new(0.0, 0.5, 100.0, 0.5, 1.0, Color::rgb(0.0, 0.0, 0.0)))
        .with_text(TextPrimitive::new(
            "700",
            50.0,
            20.0,
            10.0,
            Color::rgba(0.0, 0.0, 0.0, 0.5),
            TextHAlign::Right,
        ));
    let mut renderer = SvgRenderer::new();
    renderer.set_background(None).expect("no background");
    renderer.render(&frame).expect("render");
    let svg = renderer.document();

    assert!(!svg.contains("<g "));
    assert!(!svg.contains("<rect"));
    assert!(svg.contains("<line x1=\"0\" y1=\"0.5\" x2=\"100\" y2=\"0.5\" stroke-width=\"1\" stroke=\"#000000\"/>"));
    assert!(svg.contains("text-anchor=\"end\""));
    assert!(svg.contains("fill-opacity=\"0.5\""));
}

#[test]
fn invalid_frame_is_rejected_before_writing() {
    let frame = RenderFrame::new(Viewport::new(10, 10)).with_line(LinePrimitive::new(
        f64::NAN,
        0.0,
        1.0,
        1.0,
        1.0,
        Color::WHITE,
    ));
    let mut renderer = SvgRenderer::new();
    assert!(renderer.render(&frame).is_err());
    assert!(renderer.document().is_empty());
    assert!(renderer.write_to_path(std::env::temp_dir().join("never.svg")).is_err());
}

#[test]
fn title_is_written_as_accessible_label() {
    let mut renderer = SvgRenderer::new();
    renderer.set_title("Timeline Chart");
    renderer
        .render(&RenderFrame::new(Viewport::new(10, 10)))
        .expect("render");
    assert!(renderer.document().contains("aria-label=\"Timeline Chart\""));
    assert!(renderer.document().contains("<title>Timeline Chart</title>"));
}
