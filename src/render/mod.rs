mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use layer_stack::CanvasLayerKind;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontFamily, FontWeight, LinePrimitive, LineStrokeStyle, PolygonPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive, TextSegment,
};
pub use svg_backend::{SvgRenderStats, SvgRenderer};

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic frame so drawing code
/// stays isolated from the dataset and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;

    /// Draws a layered frame. Backends that keep paint order across
    /// primitive kinds override this; the default flattens.
    fn render_layered(&mut self, frame: &LayeredRenderFrame) -> TimelineResult<()> {
        self.render(&frame.flatten())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
