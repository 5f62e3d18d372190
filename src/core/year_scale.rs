use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, nice_ticks};
use crate::error::TimelineResult;

/// Calendar year to horizontal pixel mapping for one canvas width.
///
/// Domain is `[start_year, end_year]`, range is
/// `[left_padding, chart_width - right_padding]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearScale {
    linear: LinearScale,
    chart_width: f64,
}

impl YearScale {
    pub fn new(
        start_year: f64,
        end_year: f64,
        chart_width: f64,
        left_padding: f64,
        right_padding: f64,
    ) -> TimelineResult<Self> {
        let linear = LinearScale::new(
            start_year,
            end_year,
            left_padding,
            chart_width - right_padding,
        )?;
        Ok(Self {
            linear,
            chart_width,
        })
    }

    #[must_use]
    pub fn chart_width(self) -> f64 {
        self.chart_width
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn year_to_pixel(self, year: f64) -> f64 {
        self.linear.domain_to_pixel(year)
    }

    #[must_use]
    pub fn pixel_to_year(self, pixel: f64) -> f64 {
        self.linear.pixel_to_domain(pixel)
    }

    /// Year readout for a pointer position, rounded to the nearest year with
    /// halves going up (`-0.5` reads as `0`).
    #[must_use]
    pub fn pixel_to_rounded_year(self, pixel: f64) -> i64 {
        let year = self.pixel_to_year(pixel);
        if !year.is_finite() {
            return 0;
        }
        (year + 0.5).floor() as i64
    }

    /// Axis ticks at roughly one per `interval_years`.
    #[must_use]
    pub fn ticks(self, interval_years: f64) -> Vec<f64> {
        let (start, end) = self.linear.domain();
        nice_ticks(start, end, (end - start).abs() / interval_years)
    }
}

#[cfg(test)]
mod tests {
    use super::YearScale;

    #[test]
    fn endpoints_hit_padding_edges() {
        let scale = YearScale::new(630.0, 930.0, 2400.0, 20.0, 200.0).expect("valid scale");
        assert_eq!(scale.year_to_pixel(630.0), 20.0);
        assert_eq!(scale.year_to_pixel(930.0), 2200.0);
    }

    #[test]
    fn out_of_domain_years_extrapolate() {
        let scale = YearScale::new(630.0, 930.0, 1200.0, 20.0, 200.0).expect("valid scale");
        assert!(scale.year_to_pixel(600.0) < 20.0);
        assert!(scale.year_to_pixel(1000.0) > 1000.0);
    }

    #[test]
    fn invalid_interval_still_yields_ticks() {
        let scale = YearScale::new(630.0, 930.0, 1200.0, 20.0, 200.0).expect("valid scale");
        assert!(!scale.ticks(0.0).is_empty());
        assert!(!scale.ticks(-10.0).is_empty());
    }
}
