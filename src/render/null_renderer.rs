use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry surfaces before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
