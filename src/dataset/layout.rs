use serde::{Deserialize, Serialize};

use crate::core::{YearScale, ZoomLevel};
use crate::error::{TimelineError, TimelineResult};

/// Year domain and pixel layout constants of the chart.
///
/// Every field has a serde default, so JSON overrides may be partial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineLayout {
    pub start_year: i32,
    pub end_year: i32,
    /// Vertical spacing per entity row.
    pub row_height: f64,
    /// Thickness of the life-span bar.
    pub bar_height: f64,
    pub top_padding: f64,
    pub left_padding: f64,
    /// Room right of the domain for long labels.
    pub right_padding: f64,
    /// Distance from the axis baseline to the first row.
    pub row_offset: f64,
    pub bottom_margin: f64,
    pub min_bar_width: f64,
    /// Gap between a bar's end and its label.
    pub label_gap: f64,
    /// Gap between the primary and secondary label segments.
    pub label_segment_gap: f64,
    pub tick_interval_years: f64,
    pub base_width: f64,
    pub zoom_step: f64,
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self {
            start_year: 630,
            end_year: 930,
            row_height: 28.0,
            bar_height: 8.0,
            top_padding: 50.0,
            left_padding: 20.0,
            right_padding: 200.0,
            row_offset: 20.0,
            bottom_margin: 50.0,
            min_bar_width: 2.0,
            label_gap: 8.0,
            label_segment_gap: 8.0,
            tick_interval_years: 10.0,
            base_width: 1200.0,
            zoom_step: 300.0,
        }
    }
}

impl TimelineLayout {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.start_year >= self.end_year {
            return Err(TimelineError::InvalidData(format!(
                "year domain must satisfy start < end (got {}..{})",
                self.start_year, self.end_year
            )));
        }

        for (name, value) in [
            ("row_height", self.row_height),
            ("bar_height", self.bar_height),
            ("min_bar_width", self.min_bar_width),
            ("tick_interval_years", self.tick_interval_years),
            ("base_width", self.base_width),
            ("zoom_step", self.zoom_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "layout `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("top_padding", self.top_padding),
            ("left_padding", self.left_padding),
            ("right_padding", self.right_padding),
            ("row_offset", self.row_offset),
            ("bottom_margin", self.bottom_margin),
            ("label_gap", self.label_gap),
            ("label_segment_gap", self.label_segment_gap),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "layout `{name}` must be finite and >= 0"
                )));
            }
        }

        let narrowest = self.chart_width(ZoomLevel::MIN);
        if narrowest - self.right_padding <= self.left_padding {
            return Err(TimelineError::InvalidData(
                "paddings leave no room for the year axis at the lowest zoom".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn chart_width(&self, zoom: ZoomLevel) -> f64 {
        zoom.chart_width(self.base_width, self.zoom_step)
    }

    #[must_use]
    pub fn chart_height(&self, row_count: usize) -> f64 {
        row_count as f64 * self.row_height + self.top_padding + self.bottom_margin
    }

    /// Top edge of the bar in row `index`; independent of zoom.
    #[must_use]
    pub fn row_y(&self, index: usize) -> f64 {
        self.top_padding + self.row_offset + index as f64 * self.row_height
    }

    /// Applies a partial JSON object on top of this layout. Fields the
    /// object leaves out keep their current values, not the defaults.
    pub fn with_json_overrides(&self, json: &str) -> TimelineResult<Self> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(TimelineError::InvalidData(
                "layout overrides must be a JSON object".to_owned(),
            ));
        };
        let mut merged = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Row whose band contains `y`, if any.
    ///
    /// Each band is one `row_height` tall and centered on its bar.
    #[must_use]
    pub fn row_at_y(&self, y: f64, row_count: usize) -> Option<usize> {
        if !y.is_finite() {
            return None;
        }
        let first_band_top = self.row_y(0) + (self.bar_height - self.row_height) / 2.0;
        let offset = (y - first_band_top) / self.row_height;
        if offset < 0.0 {
            return None;
        }
        let row = offset.floor() as usize;
        (row < row_count).then_some(row)
    }

    pub fn year_scale(&self, zoom: ZoomLevel) -> TimelineResult<YearScale> {
        YearScale::new(
            f64::from(self.start_year),
            f64::from(self.end_year),
            self.chart_width(zoom),
            self.left_padding,
            self.right_padding,
        )
    }
}
