use crate::render::{
    CanvasLayerKind, Color, FontWeight, LayeredRenderFrame, LinePrimitive, LineStrokeStyle,
    RectPrimitive, Renderer, TextHAlign, TextPrimitive, TextSegment,
};

use super::TimelineChart;
use super::bar_geometry::resolve_bar_geometry;
use super::render_frame_builder::FrameContext;

impl<R: Renderer> TimelineChart<R> {
    /// One rounded life-span bar and one two-part label per poet, plus a faint
    /// accent line from the axis down to the hovered bar's start.
    pub(super) fn append_entity_primitives(
        &self,
        layered: &mut LayeredRenderFrame,
        ctx: FrameContext,
    ) {
        let layout = &self.dataset.layout;
        let style = self.style;
        let hovered_row = self.hovered_row();

        for (row, poet) in self.dataset.poets.iter().enumerate() {
            let bar = resolve_bar_geometry(ctx.scale, layout, row, poet);
            let color = poet.era.color().color;

            if hovered_row == Some(row) {
                let accent = Color {
                    alpha: style.row_accent_opacity,
                    ..color
                };
                layered.push_line(
                    CanvasLayerKind::Entities,
                    LinePrimitive::new(
                        bar.x,
                        layout.top_padding,
                        bar.x,
                        bar.y + bar.height / 2.0,
                        style.stroke_width,
                        accent,
                    )
                    .with_stroke_style(LineStrokeStyle::Dashed {
                        on_px: style.row_accent_dash_px,
                        off_px: style.row_accent_dash_px,
                    }),
                );
            }

            layered.push_rect(
                CanvasLayerKind::Entities,
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, color)
                    .with_corner_radius(bar.height / 2.0),
            );

            let mut label = TextPrimitive::new(
                poet.name.clone(),
                bar.label_x,
                bar.label_baseline_y,
                style.label_font_size_px,
                style.label_primary_color,
                TextHAlign::Left,
            )
            .with_weight(FontWeight::Bold);
            if !poet.description.is_empty() {
                label = label.with_segment(
                    TextSegment::new(
                        poet.description.clone(),
                        style.label_secondary_color,
                        FontWeight::Light,
                    )
                    .with_dx(layout.label_segment_gap),
                );
            }
            if label.text().is_empty() {
                continue;
            }
            layered.push_text(CanvasLayerKind::Entities, label);
        }
    }
}
