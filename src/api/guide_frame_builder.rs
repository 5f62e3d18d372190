use crate::interaction::HoverState;
use crate::render::{
    CanvasLayerKind, FontFamily, FontWeight, LayeredRenderFrame, LinePrimitive, LineStrokeStyle,
    PolygonPrimitive, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::TimelineChart;
use super::render_frame_builder::FrameContext;

impl<R: Renderer> TimelineChart<R> {
    /// Full-height guide line and year tag; nothing while idle.
    pub(super) fn append_guide_primitives(
        &self,
        layered: &mut LayeredRenderFrame,
        ctx: FrameContext,
    ) {
        let HoverState::Tracking(x) = self.hover_state() else {
            return;
        };
        let style = self.style;
        let top = self.dataset.layout.top_padding;

        layered.push_line(
            CanvasLayerKind::Guide,
            LinePrimitive::new(x, top, x, ctx.height, style.stroke_width, style.guide_color)
                .with_stroke_style(LineStrokeStyle::Dashed {
                    on_px: style.guide_dash_px,
                    off_px: style.guide_dash_px,
                }),
        );

        // The tag sits above the axis with its arrow tip pointing down at x.
        let tag_bottom = top - style.guide_tag_offset_px;
        layered.push_rect(
            CanvasLayerKind::Guide,
            RectPrimitive::new(
                x - style.guide_tag_width_px / 2.0,
                tag_bottom - style.guide_tag_height_px,
                style.guide_tag_width_px,
                style.guide_tag_height_px,
                style.guide_color,
            )
            .with_corner_radius(style.guide_tag_corner_radius_px),
        );
        let half = style.guide_arrow_half_width_px;
        if half > 0.0 {
            layered.push_polygon(
                CanvasLayerKind::Guide,
                PolygonPrimitive::new(
                    [
                        (x - half, tag_bottom),
                        (x, tag_bottom + half),
                        (x + half, tag_bottom),
                    ],
                    style.guide_color,
                ),
            );
        }

        let year = ctx.scale.pixel_to_rounded_year(x);
        layered.push_text(
            CanvasLayerKind::Guide,
            TextPrimitive::new(
                year.to_string(),
                x,
                tag_bottom - style.guide_label_baseline_offset_px,
                style.guide_label_font_size_px,
                style.guide_label_color,
                TextHAlign::Center,
            )
            .with_weight(FontWeight::Bold)
            .with_font_family(FontFamily::Monospace),
        );
    }
}
