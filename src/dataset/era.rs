use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Historical period of the Tang dynasty used to color-code poets.
///
/// Declaration order is the legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "初唐", alias = "early")]
    Early,
    #[serde(rename = "盛唐", alias = "high")]
    High,
    #[serde(rename = "中唐", alias = "middle")]
    Middle,
    #[serde(rename = "晚唐", alias = "late")]
    Late,
}

/// Color descriptor of one era.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraColor {
    pub hex: &'static str,
    pub color: Color,
}

impl Era {
    pub const ALL: [Era; 4] = [Era::Early, Era::High, Era::Middle, Era::Late];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "初唐",
            Self::High => "盛唐",
            Self::Middle => "中唐",
            Self::Late => "晚唐",
        }
    }

    #[must_use]
    pub const fn color(self) -> EraColor {
        match self {
            Self::Early => EraColor {
                hex: "#F8CE58",
                color: Color::from_rgb8(0xF8, 0xCE, 0x58),
            },
            Self::High => EraColor {
                hex: "#82C272",
                color: Color::from_rgb8(0x82, 0xC2, 0x72),
            },
            Self::Middle => EraColor {
                hex: "#6CA6DB",
                color: Color::from_rgb8(0x6C, 0xA6, 0xDB),
            },
            Self::Late => EraColor {
                hex: "#B4A5D2",
                color: Color::from_rgb8(0xB4, 0xA5, 0xD2),
            },
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Era;

    #[test]
    fn hex_and_color_agree_for_every_era() {
        for era in Era::ALL {
            let entry = era.color();
            assert_eq!(entry.color.to_hex(), entry.hex);
        }
    }

    #[test]
    fn serde_accepts_label_and_ascii_alias() {
        let from_label: Era = serde_json::from_str("\"盛唐\"").expect("label");
        let from_alias: Era = serde_json::from_str("\"high\"").expect("alias");
        assert_eq!(from_label, Era::High);
        assert_eq!(from_alias, Era::High);
        assert_eq!(serde_json::to_string(&Era::Late).expect("json"), "\"晚唐\"");
        assert!(serde_json::from_str::<Era>("\"宋\"").is_err());
    }
}
