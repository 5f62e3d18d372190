use tracing::trace;

use crate::core::{Viewport, YearScale};
use crate::error::TimelineResult;
use crate::render::{LayeredRenderFrame, RenderFrame, Renderer};

use super::TimelineChart;

/// Geometry shared by every layer builder for one frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct FrameContext {
    pub scale: YearScale,
    pub width: f64,
    pub height: f64,
}

impl<R: Renderer> TimelineChart<R> {
    pub(super) fn frame_context(&self) -> TimelineResult<FrameContext> {
        Ok(FrameContext {
            scale: self.year_scale()?,
            width: self.chart_width(),
            height: self.chart_height(),
        })
    }

    /// Derives the complete frame for the current zoom and hover state.
    pub fn build_layered_render_frame(&self) -> TimelineResult<LayeredRenderFrame> {
        let ctx = self.frame_context()?;
        let mut layered = LayeredRenderFrame::new(Viewport::from_extent(ctx.width, ctx.height));

        self.append_axis_primitives(&mut layered, ctx);
        self.append_entity_primitives(&mut layered, ctx);
        self.append_guide_primitives(&mut layered, ctx);

        trace!(
            zoom = %self.zoom(),
            width = ctx.width,
            height = ctx.height,
            hover = ?self.hover_state(),
            "timeline frame built"
        );
        Ok(layered)
    }

    pub fn build_render_frame(&self) -> TimelineResult<RenderFrame> {
        Ok(self.build_layered_render_frame()?.flatten())
    }
}
