use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{TimelineError, TimelineResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> TimelineResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(TimelineError::InvalidData(format!(
                "color `{hex}` must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let channel = |index: usize| -> TimelineResult<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| TimelineError::InvalidData(format!("color `{hex}` is not hex")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Uppercase `#RRGGBB`; alpha is not encoded.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue)
        )
    }

    pub fn validate(self) -> TimelineResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Stroke pattern for line primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed { on_px: f64, off_px: f64 },
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(TimelineError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(TimelineError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let LineStrokeStyle::Dashed { on_px, off_px } = self.stroke_style {
            if !on_px.is_finite() || !off_px.is_finite() || on_px <= 0.0 || off_px < 0.0 {
                return Err(TimelineError::InvalidData(
                    "line dash pattern must be finite with a positive dash".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}

/// Draw command for one filled, optionally rounded rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> TimelineResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(TimelineError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(TimelineError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Draw command for a small filled polygon (markers, arrows).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[(f64, f64); 4]>,
    pub fill_color: Color,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>, fill_color: Color) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill_color,
        }
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.points.len() < 3 {
            return Err(TimelineError::InvalidData(
                "polygon needs at least three points".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TimelineError::InvalidData(
                "polygon points must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    Sans,
    Monospace,
}

/// One run of uniformly styled text inside a label.
///
/// `dx` is the extra horizontal gap inserted before the run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSegment {
    pub text: String,
    pub color: Color,
    pub weight: FontWeight,
    pub dx: f64,
}

impl TextSegment {
    #[must_use]
    pub fn new(text: impl Into<String>, color: Color, weight: FontWeight) -> Self {
        Self {
            text: text.into(),
            color,
            weight,
            dx: 0.0,
        }
    }

    #[must_use]
    pub fn with_dx(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }
}

/// Draw command for one label in pixel space.
///
/// `y` is the text baseline. Segments are laid out left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub segments: SmallVec<[TextSegment; 2]>,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub font_family: FontFamily,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        let mut segments = SmallVec::new();
        segments.push(TextSegment::new(text, color, FontWeight::Regular));
        Self {
            segments,
            x,
            y,
            font_size_px,
            font_family: FontFamily::Sans,
            h_align,
        }
    }

    /// Applies `weight` to every segment.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        for segment in &mut self.segments {
            segment.weight = weight;
        }
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    #[must_use]
    pub fn with_segment(mut self, segment: TextSegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Concatenated text of all segments.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.segments.iter().all(|segment| segment.text.is_empty()) {
            return Err(TimelineError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(TimelineError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        for segment in &self.segments {
            if !segment.dx.is_finite() {
                return Err(TimelineError::InvalidData(
                    "text segment offset must be finite".to_owned(),
                ));
            }
            segment.color.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, FontWeight, TextHAlign, TextPrimitive, TextSegment};

    #[test]
    fn hex_round_trip_is_uppercase() {
        let color = Color::from_hex("#82c272").expect("valid hex");
        assert_eq!(color.to_hex(), "#82C272");
        assert_eq!(Color::from_rgb8(0x82, 0xC2, 0x72), color);
    }

    #[test]
    fn hex_parser_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn hex_with_alpha_sets_alpha_channel() {
        let color = Color::from_hex("FFFFFF80").expect("valid hex");
        assert!((color.alpha - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn multi_segment_text_concatenates() {
        let label = TextPrimitive::new("李白", 0.0, 0.0, 13.0, Color::WHITE, TextHAlign::Left)
            .with_weight(FontWeight::Bold)
            .with_segment(TextSegment::new("诗仙", Color::WHITE, FontWeight::Light).with_dx(8.0));
        assert_eq!(label.text(), "李白诗仙");
        assert_eq!(label.segments[0].weight, FontWeight::Bold);
        assert_eq!(label.segments[1].dx, 8.0);
        label.validate().expect("valid label");
    }
}
