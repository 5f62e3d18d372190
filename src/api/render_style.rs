use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

/// Colors, strokes and font sizes of every chart element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub stroke_width: f64,
    pub grid_line_color: Color,
    pub grid_dash_px: f64,
    pub tick_mark_color: Color,
    pub tick_mark_length_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    /// Distance from the axis baseline up to the tick label baseline.
    pub tick_label_offset_px: f64,
    pub baseline_color: Color,
    pub label_primary_color: Color,
    pub label_secondary_color: Color,
    pub label_font_size_px: f64,
    /// Dash of the accent line dropped from the axis to a hovered bar.
    pub row_accent_dash_px: f64,
    /// Era color alpha of the row accent line.
    pub row_accent_opacity: f64,
    pub guide_color: Color,
    pub guide_dash_px: f64,
    pub guide_label_color: Color,
    pub guide_label_font_size_px: f64,
    pub guide_tag_width_px: f64,
    pub guide_tag_height_px: f64,
    pub guide_tag_corner_radius_px: f64,
    /// Gap between the axis baseline and the tag's arrow tip row.
    pub guide_tag_offset_px: f64,
    /// Distance from the tag's bottom edge up to the readout baseline.
    pub guide_label_baseline_offset_px: f64,
    pub guide_arrow_half_width_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            grid_line_color: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            grid_dash_px: 4.0,
            tick_mark_color: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            tick_mark_length_px: 5.0,
            tick_label_color: Color::from_rgb8(0x6B, 0x72, 0x80),
            tick_label_font_size_px: 10.0,
            tick_label_offset_px: 10.0,
            baseline_color: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            label_primary_color: Color::from_rgb8(0x1F, 0x29, 0x37),
            label_secondary_color: Color::from_rgb8(0x6B, 0x72, 0x80),
            label_font_size_px: 13.0,
            row_accent_dash_px: 2.0,
            row_accent_opacity: 0.4,
            guide_color: Color::from_rgb8(0xDC, 0x26, 0x26),
            guide_dash_px: 4.0,
            guide_label_color: Color::WHITE,
            guide_label_font_size_px: 11.0,
            guide_tag_width_px: 48.0,
            guide_tag_height_px: 20.0,
            guide_tag_corner_radius_px: 4.0,
            guide_tag_offset_px: 12.0,
            guide_label_baseline_offset_px: 6.0,
            guide_arrow_half_width_px: 4.0,
        }
    }
}

pub(super) fn validate_timeline_style(style: TimelineStyle) -> TimelineResult<()> {
    for color in [
        style.grid_line_color,
        style.tick_mark_color,
        style.tick_label_color,
        style.baseline_color,
        style.label_primary_color,
        style.label_secondary_color,
        style.guide_color,
        style.guide_label_color,
    ] {
        color.validate()?;
    }
    if !(0.0..=1.0).contains(&style.row_accent_opacity) {
        return Err(TimelineError::InvalidData(
            "style `row_accent_opacity` must be in [0, 1]".to_owned(),
        ));
    }

    for (name, value) in [
        ("stroke_width", style.stroke_width),
        ("grid_dash_px", style.grid_dash_px),
        ("tick_label_font_size_px", style.tick_label_font_size_px),
        ("label_font_size_px", style.label_font_size_px),
        ("row_accent_dash_px", style.row_accent_dash_px),
        ("guide_dash_px", style.guide_dash_px),
        ("guide_label_font_size_px", style.guide_label_font_size_px),
        ("guide_tag_width_px", style.guide_tag_width_px),
        ("guide_tag_height_px", style.guide_tag_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("tick_mark_length_px", style.tick_mark_length_px),
        ("tick_label_offset_px", style.tick_label_offset_px),
        ("guide_tag_corner_radius_px", style.guide_tag_corner_radius_px),
        ("guide_tag_offset_px", style.guide_tag_offset_px),
        (
            "guide_label_baseline_offset_px",
            style.guide_label_baseline_offset_px,
        ),
        ("guide_arrow_half_width_px", style.guide_arrow_half_width_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(TimelineError::InvalidData(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}
