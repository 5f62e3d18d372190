use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{
    Color, FontFamily, FontWeight, LayeredRenderFrame, LinePrimitive, LineStrokeStyle,
    PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context (for example a GTK
/// `DrawingArea` draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &LayeredRenderFrame,
    ) -> TimelineResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Offscreen rendering goes through `Renderer` into an owned image surface,
/// which is resized to the frame viewport and can be saved as PNG. In-place
/// rendering goes through `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> TimelineResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> TimelineResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> TimelineResult<()> {
        let mut file = File::create(path.as_ref())?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| TimelineError::InvalidData(format!("failed to write png: {err}")))
    }

    fn ensure_surface(&mut self, width: u32, height: u32) -> TimelineResult<()> {
        let width = i32::try_from(width)
            .map_err(|_| TimelineError::InvalidData("surface width overflow".to_owned()))?;
        let height = i32::try_from(height)
            .map_err(|_| TimelineError::InvalidData("surface height overflow".to_owned()))?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn clear(&self, context: &Context) -> TimelineResult<()> {
        self.clear_color.validate()?;
        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }

    fn draw_layered(&mut self, context: &Context, frame: &LayeredRenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.clear(context)?;

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            draw_primitives(
                context,
                &mut stats,
                &layer.lines,
                &layer.rects,
                &layer.polygons,
                &layer.texts,
            )?;
        }
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.ensure_surface(frame.viewport.width, frame.viewport.height)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.clear(&context)?;

        let mut stats = CairoRenderStats::default();
        draw_primitives(
            &context,
            &mut stats,
            &frame.lines,
            &frame.rects,
            &frame.polygons,
            &frame.texts,
        )?;
        self.last_stats = stats;
        Ok(())
    }

    fn render_layered(&mut self, frame: &LayeredRenderFrame) -> TimelineResult<()> {
        self.ensure_surface(frame.viewport.width, frame.viewport.height)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.draw_layered(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &LayeredRenderFrame,
    ) -> TimelineResult<()> {
        self.draw_layered(context, frame)
    }
}

fn create_surface(width: i32, height: i32) -> TimelineResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(TimelineError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn draw_primitives(
    context: &Context,
    stats: &mut CairoRenderStats,
    lines: &[LinePrimitive],
    rects: &[RectPrimitive],
    polygons: &[PolygonPrimitive],
    texts: &[TextPrimitive],
) -> TimelineResult<()> {
    for line in lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        match line.stroke_style {
            LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
        }
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }
    context.set_dash(&[], 0.0);

    for rect in rects {
        append_rect_path(context, *rect);
        apply_color(context, rect.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for polygon in polygons {
        let mut points = polygon.points.iter();
        if let Some((x, y)) = points.next() {
            context.move_to(*x, *y);
        }
        for (x, y) in points {
            context.line_to(*x, *y);
        }
        context.close_path();
        apply_color(context, polygon.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill polygon", err))?;
        stats.polygons_drawn += 1;
    }

    for text in texts {
        draw_text(context, text);
        stats.texts_drawn += 1;
    }
    Ok(())
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layouts: Vec<(pango::Layout, f64)> = text
        .segments
        .iter()
        .filter(|segment| !segment.text.is_empty())
        .map(|segment| {
            let layout = pangocairo::functions::create_layout(context);
            let font_description = FontDescription::from_string(&format!(
                "{}{} {}px",
                font_family_name(text.font_family),
                font_weight_suffix(segment.weight),
                text.font_size_px
            ));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&segment.text);
            (layout, segment.dx)
        })
        .collect();

    let total_width: f64 = layouts
        .iter()
        .map(|(layout, dx)| f64::from(layout.pixel_size().0) + dx)
        .sum();
    let mut x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - total_width / 2.0,
        TextHAlign::Right => text.x - total_width,
    };

    for ((layout, dx), segment) in layouts.iter().zip(
        text.segments
            .iter()
            .filter(|segment| !segment.text.is_empty()),
    ) {
        x += dx;
        // Frame y is a baseline; pango positions the layout by its top edge.
        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        apply_color(context, segment.color);
        context.move_to(x, text.y - baseline);
        pangocairo::functions::show_layout(context, layout);
        x += f64::from(layout.pixel_size().0);
    }
}

fn font_family_name(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "Sans",
        FontFamily::Monospace => "Monospace",
    }
}

fn font_weight_suffix(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Light => " Light",
        FontWeight::Regular => "",
        FontWeight::Bold => " Bold",
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> TimelineError {
    TimelineError::InvalidData(format!("{prefix}: {err}"))
}
