use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ZoomLevel;
use crate::dataset::{Era, legend_entries};
use crate::error::TimelineResult;
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::TimelineChart;
use super::bar_geometry::BarGeometry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSnapshot {
    pub id: String,
    pub name: String,
    pub era: Era,
    pub color_hex: String,
    #[serde(flatten)]
    pub geometry: BarGeometry,
}

/// Serializable view of everything a frame is derived from, plus the
/// derived geometry. Stable input for fixtures and host tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub zoom: ZoomLevel,
    pub width: f64,
    pub height: f64,
    pub year_domain: (i32, i32),
    pub pixel_range: (f64, f64),
    pub hover: HoverState,
    pub hover_year: Option<i64>,
    /// Row carrying the hover accent, if any.
    pub hovered_row: Option<usize>,
    pub ticks: Vec<f64>,
    /// Era label to swatch hex, in legend order.
    pub legend: IndexMap<String, String>,
    pub bars: Vec<BarSnapshot>,
}

impl<R: Renderer> TimelineChart<R> {
    pub fn snapshot(&self) -> TimelineResult<TimelineSnapshot> {
        let scale = self.year_scale()?;
        let layout = &self.dataset.layout;

        let bars = self
            .dataset
            .poets
            .iter()
            .zip(self.bar_geometries()?)
            .map(|(poet, geometry)| BarSnapshot {
                id: poet.id.clone(),
                name: poet.name.clone(),
                era: poet.era,
                color_hex: poet.era.color().hex.to_owned(),
                geometry,
            })
            .collect();

        Ok(TimelineSnapshot {
            zoom: self.zoom(),
            width: self.chart_width(),
            height: self.chart_height(),
            year_domain: (layout.start_year, layout.end_year),
            pixel_range: scale.pixel_range(),
            hover: self.hover_state(),
            hover_year: self.hover_year()?,
            hovered_row: self.hovered_row(),
            ticks: scale.ticks(layout.tick_interval_years),
            legend: legend_entries()
                .iter()
                .map(|entry| (entry.label.to_owned(), entry.hex.to_owned()))
                .collect(),
            bars,
        })
    }

    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot()?)?)
    }
}
