use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Integer zoom level of the chart, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    pub const MIN: ZoomLevel = ZoomLevel(1);
    pub const MAX: ZoomLevel = ZoomLevel(10);
    pub const DEFAULT: ZoomLevel = ZoomLevel(5);

    pub fn new(value: i64) -> TimelineResult<Self> {
        if value < i64::from(Self::MIN.0) || value > i64::from(Self::MAX.0) {
            return Err(TimelineError::InvalidZoom {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(value as u8))
    }

    /// Saturating constructor for slider-like inputs.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0)) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every level from `MIN` to `MAX`, ascending.
    pub fn all() -> impl Iterator<Item = ZoomLevel> {
        (Self::MIN.0..=Self::MAX.0).map(ZoomLevel)
    }

    /// Canvas width for this level: `base_width + (level - 1) * zoom_step`.
    #[must_use]
    pub fn chart_width(self, base_width: f64, zoom_step: f64) -> f64 {
        base_width + f64::from(self.0 - Self::MIN.0) * zoom_step
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for ZoomLevel {
    type Error = TimelineError;

    fn try_from(value: i64) -> TimelineResult<Self> {
        Self::new(value)
    }
}

impl From<ZoomLevel> for u8 {
    fn from(level: ZoomLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLevel;

    #[test]
    fn rejects_out_of_range_levels() {
        assert!(ZoomLevel::new(0).is_err());
        assert!(ZoomLevel::new(11).is_err());
        assert_eq!(ZoomLevel::new(7).expect("in range").get(), 7);
    }

    #[test]
    fn clamped_saturates() {
        assert_eq!(ZoomLevel::clamped(-3), ZoomLevel::MIN);
        assert_eq!(ZoomLevel::clamped(99), ZoomLevel::MAX);
    }

    #[test]
    fn default_level_is_five_and_width_is_2400() {
        let level = ZoomLevel::default();
        assert_eq!(level.get(), 5);
        assert_eq!(level.chart_width(1200.0, 300.0), 2400.0);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let parsed: Result<ZoomLevel, _> = serde_json::from_str("12");
        assert!(parsed.is_err());
        let parsed: ZoomLevel = serde_json::from_str("3").expect("valid level");
        assert_eq!(parsed.get(), 3);
    }
}
