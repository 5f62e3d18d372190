use serde::{Deserialize, Serialize};

use crate::core::YearScale;
use crate::dataset::{Poet, TimelineLayout};

/// Pixel placement of one entity row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Unclamped pixel of the end year; labels hang off this point.
    pub end_x: f64,
    pub label_x: f64,
    pub label_baseline_y: f64,
}

pub(super) fn resolve_bar_geometry(
    scale: YearScale,
    layout: &TimelineLayout,
    row: usize,
    poet: &Poet,
) -> BarGeometry {
    let x_start = scale.year_to_pixel(f64::from(poet.start));
    let x_end = scale.year_to_pixel(f64::from(poet.end));
    let y = layout.row_y(row);

    BarGeometry {
        row,
        x: x_start,
        y,
        // Inverted or zero spans stay visible at the minimum width.
        width: (x_end - x_start).max(layout.min_bar_width),
        height: layout.bar_height,
        end_x: x_end,
        label_x: x_end + layout.label_gap,
        label_baseline_y: y + layout.bar_height - 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_bar_geometry;
    use crate::core::ZoomLevel;
    use crate::dataset::{Era, Poet, TimelineLayout};

    #[test]
    fn inverted_span_clamps_to_minimum_width() {
        let layout = TimelineLayout::default();
        let scale = layout.year_scale(ZoomLevel::DEFAULT).expect("scale");
        let poet = Poet::new("x", "反", "inverted", 800, 750, Era::Late);

        let bar = resolve_bar_geometry(scale, &layout, 3, &poet);
        assert_eq!(bar.width, 2.0);
        assert!(bar.end_x < bar.x);
        assert_eq!(bar.label_x, bar.end_x + 8.0);
        assert_eq!(bar.y, 50.0 + 20.0 + 3.0 * 28.0);
        assert_eq!(bar.label_baseline_y, bar.y + 7.0);
    }
}
