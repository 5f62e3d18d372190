use crate::render::{
    CanvasLayerKind, FontFamily, LayeredRenderFrame, LinePrimitive, LineStrokeStyle, Renderer,
    TextHAlign, TextPrimitive,
};

use super::TimelineChart;
use super::render_frame_builder::FrameContext;

impl<R: Renderer> TimelineChart<R> {
    /// Gridline, tick mark and year label per tick, plus the baseline.
    pub(super) fn append_axis_primitives(
        &self,
        layered: &mut LayeredRenderFrame,
        ctx: FrameContext,
    ) {
        let layout = &self.dataset.layout;
        let style = self.style;
        let top = layout.top_padding;

        for tick in ctx.scale.ticks(layout.tick_interval_years) {
            let x = ctx.scale.year_to_pixel(tick);

            layered.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(x, top, x, ctx.height, style.stroke_width, style.grid_line_color)
                    .with_stroke_style(LineStrokeStyle::Dashed {
                        on_px: style.grid_dash_px,
                        off_px: style.grid_dash_px,
                    }),
            );
            layered.push_line(
                CanvasLayerKind::Axis,
                LinePrimitive::new(
                    x,
                    top - style.tick_mark_length_px,
                    x,
                    top,
                    style.stroke_width,
                    style.tick_mark_color,
                ),
            );
            layered.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    format_year(tick),
                    x,
                    top - style.tick_label_offset_px,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Center,
                )
                .with_font_family(FontFamily::Monospace),
            );
        }

        let (range_start, range_end) = ctx.scale.pixel_range();
        layered.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::new(
                range_start,
                top,
                range_end,
                top,
                style.stroke_width,
                style.baseline_color,
            ),
        );
    }
}

fn format_year(year: f64) -> String {
    if year.fract() == 0.0 {
        format!("{}", year as i64)
    } else {
        format!("{year}")
    }
}
