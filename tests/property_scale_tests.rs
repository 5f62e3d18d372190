use poet_timeline::core::{YearScale, ZoomLevel};
use poet_timeline::dataset::TimelineLayout;
use proptest::prelude::*;

proptest! {
    #[test]
    fn inverse_of_forward_rounds_back_to_year(
        year in 630i32..=930,
        zoom in 1i64..=10,
    ) {
        let layout = TimelineLayout::default();
        let scale = layout
            .year_scale(ZoomLevel::new(zoom).expect("valid zoom"))
            .expect("valid scale");

        let px = scale.year_to_pixel(f64::from(year));
        let recovered = scale.pixel_to_rounded_year(px);

        prop_assert!((recovered - i64::from(year)).abs() <= 1);
    }

    #[test]
    fn forward_map_is_strictly_increasing(
        first in 400.0f64..1200.0,
        delta in 0.001f64..500.0,
        zoom in 1i64..=10,
    ) {
        let layout = TimelineLayout::default();
        let scale = layout
            .year_scale(ZoomLevel::new(zoom).expect("valid zoom"))
            .expect("valid scale");

        prop_assert!(scale.year_to_pixel(first) < scale.year_to_pixel(first + delta));
    }

    #[test]
    fn width_is_strictly_increasing_in_zoom(low in 1i64..10, step in 1i64..10) {
        let high = (low + step).min(10);
        prop_assume!(high > low);
        let layout = TimelineLayout::default();
        let low_width = layout.chart_width(ZoomLevel::new(low).expect("valid zoom"));
        let high_width = layout.chart_width(ZoomLevel::new(high).expect("valid zoom"));
        prop_assert!(low_width < high_width);
    }

    #[test]
    fn arbitrary_domains_round_trip(
        start in -5_000.0f64..5_000.0,
        span in 1.0f64..10_000.0,
        width in 500.0f64..10_000.0,
        factor in 0.0f64..1.0,
    ) {
        let scale = YearScale::new(start, start + span, width, 20.0, 200.0).expect("valid scale");
        let year = start + factor * span;
        let recovered = scale.pixel_to_year(scale.year_to_pixel(year));
        prop_assert!((recovered - year).abs() <= 1e-6);
    }
}
