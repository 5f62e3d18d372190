use std::path::Path;

use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{
    CanvasLayerKind, Color, FontFamily, FontWeight, LayeredRenderFrame, LinePrimitive,
    LineStrokeStyle, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Serializes frames into a standalone SVG document.
///
/// Each render replaces the previous document. Layered renders emit one
/// `<g>` per canvas layer so paint order survives across primitive kinds.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    document: String,
    background: Option<Color>,
    title: Option<String>,
    last_stats: SvgRenderStats,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: String::new(),
            background: Some(Color::WHITE),
            title: None,
            last_stats: SvgRenderStats::default(),
        }
    }

    /// `None` leaves the canvas transparent.
    pub fn set_background(&mut self, background: Option<Color>) -> TimelineResult<()> {
        if let Some(color) = background {
            color.validate()?;
        }
        self.background = background;
        Ok(())
    }

    /// Accessible label written as the root `aria-label` and `<title>`.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> TimelineResult<()> {
        if self.document.is_empty() {
            return Err(TimelineError::InvalidData(
                "nothing rendered yet".to_owned(),
            ));
        }
        std::fs::write(path.as_ref(), &self.document)?;
        debug!(path = %path.as_ref().display(), bytes = self.document.len(), "svg written");
        Ok(())
    }

    fn open_document(&self, out: &mut String, width: u32, height: u32) {
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\""
        ));
        if let Some(title) = &self.title {
            out.push_str(&format!(" aria-label=\"{}\"", escape(title)));
        }
        out.push_str(">\n");
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape(title)));
        }
        if let Some(color) = self.background {
            out.push_str(&format!(
                "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\"{}/>\n",
                paint_attrs("fill", color)
            ));
        }
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;

        let mut out = String::new();
        self.open_document(&mut out, frame.viewport.width, frame.viewport.height);
        let mut stats = SvgRenderStats::default();
        write_primitives(
            &mut out,
            &mut stats,
            &frame.lines,
            &frame.rects,
            &frame.polygons,
            &frame.texts,
        );
        out.push_str("</svg>\n");

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }

    fn render_layered(&mut self, frame: &LayeredRenderFrame) -> TimelineResult<()> {
        frame.validate()?;

        let mut out = String::new();
        self.open_document(&mut out, frame.viewport.width, frame.viewport.height);
        let mut stats = SvgRenderStats::default();
        for layer in &frame.layers {
            if layer.is_empty() {
                continue;
            }
            out.push_str(&format!("<g class=\"{}\"", layer.kind.css_class()));
            if layer.kind == CanvasLayerKind::Guide {
                out.push_str(" pointer-events=\"none\"");
            }
            out.push_str(">\n");
            write_primitives(
                &mut out,
                &mut stats,
                &layer.lines,
                &layer.rects,
                &layer.polygons,
                &layer.texts,
            );
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");

        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_primitives(
    out: &mut String,
    stats: &mut SvgRenderStats,
    lines: &[LinePrimitive],
    rects: &[RectPrimitive],
    polygons: &[PolygonPrimitive],
    texts: &[TextPrimitive],
) {
    for line in lines {
        write_line(out, line);
        stats.lines_drawn += 1;
    }
    for rect in rects {
        write_rect(out, rect);
        stats.rects_drawn += 1;
    }
    for polygon in polygons {
        write_polygon(out, polygon);
        stats.polygons_drawn += 1;
    }
    for text in texts {
        write_text(out, text);
        stats.texts_drawn += 1;
    }
}

fn write_line(out: &mut String, line: &LinePrimitive) {
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke-width=\"{}\"{}",
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        num(line.stroke_width),
        paint_attrs("stroke", line.color),
    ));
    if let LineStrokeStyle::Dashed { on_px, off_px } = line.stroke_style {
        out.push_str(&format!(
            " stroke-dasharray=\"{} {}\"",
            num(on_px),
            num(off_px)
        ));
    }
    out.push_str("/>\n");
}

fn write_rect(out: &mut String, rect: &RectPrimitive) {
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}",
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        paint_attrs("fill", rect.fill_color),
    ));
    if rect.corner_radius > 0.0 {
        out.push_str(&format!(" rx=\"{}\"", num(rect.corner_radius)));
    }
    out.push_str("/>\n");
}

fn write_polygon(out: &mut String, polygon: &PolygonPrimitive) {
    let mut path = String::new();
    for (index, (x, y)) in polygon.points.iter().enumerate() {
        let command = if index == 0 { "M" } else { " L" };
        path.push_str(&format!("{command} {} {}", num(*x), num(*y)));
    }
    path.push_str(" Z");
    out.push_str(&format!(
        "<path d=\"{path}\"{}/>\n",
        paint_attrs("fill", polygon.fill_color)
    ));
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let family = match text.font_family {
        FontFamily::Sans => "sans-serif",
        FontFamily::Monospace => "monospace",
    };
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{family}\" text-anchor=\"{anchor}\">",
        num(text.x),
        num(text.y),
        num(text.font_size_px),
    ));
    for segment in &text.segments {
        out.push_str(&format!(
            "<tspan font-weight=\"{}\"{}",
            font_weight(segment.weight),
            paint_attrs("fill", segment.color)
        ));
        if segment.dx != 0.0 {
            out.push_str(&format!(" dx=\"{}\"", num(segment.dx)));
        }
        out.push_str(&format!(">{}</tspan>", escape(&segment.text)));
    }
    out.push_str("</text>\n");
}

fn font_weight(weight: FontWeight) -> u16 {
    match weight {
        FontWeight::Light => 300,
        FontWeight::Regular => 400,
        FontWeight::Bold => 700,
    }
}

fn paint_attrs(attr: &str, color: Color) -> String {
    let mut attrs = format!(" {attr}=\"{}\"", color.to_hex());
    if color.alpha < 1.0 {
        attrs.push_str(&format!(" {attr}-opacity=\"{}\"", num(color.alpha)));
    }
    attrs
}

/// Shortest stable decimal form: integers without a fraction, otherwise up
/// to three decimals with trailing zeros removed.
fn num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, num};

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(20.0), "20");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(-0.0001), "0");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape("\"诗仙\" <b> & 'x'"), "&quot;诗仙&quot; &lt;b&gt; &amp; &apos;x&apos;");
    }
}
