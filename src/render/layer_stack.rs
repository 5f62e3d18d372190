use serde::{Deserialize, Serialize};

/// Canvas layers, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    Entities,
    Guide,
}

impl CanvasLayerKind {
    /// Paint order: grid under the axis, entity bars over both, and the
    /// hover guide on top of everything.
    pub const CANONICAL_ORDER: [CanvasLayerKind; 4] = [
        CanvasLayerKind::Grid,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Entities,
        CanvasLayerKind::Guide,
    ];

    /// Stable name used for SVG group classes.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Grid => "grid-layer",
            Self::Axis => "axis-layer",
            Self::Entities => "poets-layer",
            Self::Guide => "guide-layer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn guide_paints_last() {
        assert_eq!(
            CanvasLayerKind::CANONICAL_ORDER.last().copied(),
            Some(CanvasLayerKind::Guide)
        );
    }
}
