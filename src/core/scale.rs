use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Continuous linear map from a domain interval onto a pixel range.
///
/// Values outside the domain extrapolate; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> TimelineResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(TimelineError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(TimelineError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of [`LinearScale::domain_to_pixel`].
    ///
    /// A collapsed pixel range has no inverse; every pixel then maps to the
    /// domain start.
    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
