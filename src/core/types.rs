use serde::{Deserialize, Serialize};

/// Pixel size of the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a viewport from fractional pixel extents, rounding up so the
    /// canvas never clips the last pixel column/row.
    #[must_use]
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self {
            width: extent_to_px(width),
            height: extent_to_px(height),
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

fn extent_to_px(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.ceil().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn from_extent_rounds_up_and_rejects_non_finite() {
        assert_eq!(Viewport::from_extent(2400.0, 1024.0), Viewport::new(2400, 1024));
        assert_eq!(Viewport::from_extent(10.2, 3.7), Viewport::new(11, 4));
        assert!(!Viewport::from_extent(f64::NAN, 10.0).is_valid());
        assert!(!Viewport::from_extent(-4.0, 10.0).is_valid());
    }
}
