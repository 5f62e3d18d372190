use tracing::debug;

use crate::core::{Viewport, YearScale, ZoomLevel};
use crate::dataset::{Dataset, TimelineLayout};
use crate::error::TimelineResult;
use crate::interaction::{HoverState, InteractionState};
use crate::render::Renderer;

use super::bar_geometry::{BarGeometry, resolve_bar_geometry};
use super::render_style::{TimelineStyle, validate_timeline_style};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Timeline facade consumed by host applications.
///
/// Owns the dataset, the style and the two transient UI cells (zoom level and
/// hover). Geometry is never cached: every frame and every query re-derives
/// the scale and tick set from the current state.
#[derive(Debug)]
pub struct TimelineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) dataset: Dataset,
    pub(super) style: TimelineStyle,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> TimelineChart<R> {
    pub fn new(renderer: R, dataset: Dataset) -> TimelineResult<Self> {
        dataset.layout.validate()?;
        debug!(
            poets = dataset.len(),
            start_year = dataset.layout.start_year,
            end_year = dataset.layout.end_year,
            "timeline chart initialized"
        );
        Ok(Self {
            renderer,
            dataset,
            style: TimelineStyle::default(),
            interaction: InteractionState::default(),
        })
    }

    pub fn with_builtin_dataset(renderer: R) -> TimelineResult<Self> {
        Self::new(renderer, Dataset::builtin().clone())
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn layout(&self) -> &TimelineLayout {
        &self.dataset.layout
    }

    #[must_use]
    pub fn style(&self) -> TimelineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) -> TimelineResult<()> {
        validate_timeline_style(style)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.interaction.zoom()
    }

    /// Returns `true` when the level changed.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) -> bool {
        let changed = self.interaction.set_zoom(zoom);
        if changed {
            debug!(zoom = %zoom, width = self.chart_width(), "zoom applied");
        }
        changed
    }

    /// Raw slider input; values outside `1..=10` are rejected.
    pub fn set_zoom_value(&mut self, value: i64) -> TimelineResult<bool> {
        Ok(self.set_zoom(ZoomLevel::new(value)?))
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.interaction.on_pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.dataset.layout.chart_width(self.zoom())
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.dataset.layout.chart_height(self.dataset.len())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::from_extent(self.chart_width(), self.chart_height())
    }

    pub fn year_scale(&self) -> TimelineResult<YearScale> {
        self.dataset.layout.year_scale(self.zoom())
    }

    pub fn map_year_to_pixel(&self, year: f64) -> TimelineResult<f64> {
        Ok(self.year_scale()?.year_to_pixel(year))
    }

    pub fn map_pixel_to_year(&self, pixel: f64) -> TimelineResult<f64> {
        Ok(self.year_scale()?.pixel_to_year(pixel))
    }

    pub fn tick_years(&self) -> TimelineResult<Vec<f64>> {
        Ok(self
            .year_scale()?
            .ticks(self.dataset.layout.tick_interval_years))
    }

    /// Rounded year under the hover guide, `None` while idle.
    pub fn hover_year(&self) -> TimelineResult<Option<i64>> {
        let Some(x) = self.hover_state().pointer_x() else {
            return Ok(None);
        };
        Ok(Some(self.year_scale()?.pixel_to_rounded_year(x)))
    }

    /// Row under the pointer while tracking, if the pointer is inside a row band.
    #[must_use]
    pub fn hovered_row(&self) -> Option<usize> {
        let y = self.interaction.pointer_y()?;
        self.dataset.layout.row_at_y(y, self.dataset.len())
    }

    /// Bar placement for every poet, in row order.
    pub fn bar_geometries(&self) -> TimelineResult<Vec<BarGeometry>> {
        let scale = self.year_scale()?;
        Ok(self
            .dataset
            .poets
            .iter()
            .enumerate()
            .map(|(row, poet)| resolve_bar_geometry(scale, &self.dataset.layout, row, poet))
            .collect())
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_layered_render_frame()?;
        self.renderer.render_layered(&frame)
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> TimelineResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_layered_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
