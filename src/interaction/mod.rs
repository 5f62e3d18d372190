use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ZoomLevel;

/// Hover guide state machine.
///
/// `Idle -> Tracking(x)` on pointer move, `Tracking(x) -> Tracking(x')` on
/// further moves and `Tracking(_) -> Idle` on pointer leave.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "x", rename_all = "snake_case")]
pub enum HoverState {
    #[default]
    Idle,
    Tracking(f64),
}

impl HoverState {
    #[must_use]
    pub fn pointer_x(self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Tracking(x) => Some(x),
        }
    }

    #[must_use]
    pub fn is_tracking(self) -> bool {
        matches!(self, Self::Tracking(_))
    }
}

/// Transient UI state owned by the chart: zoom level and hover.
///
/// Each event replaces a cell wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    zoom: ZoomLevel,
    hover: HoverState,
    pointer_y: f64,
}

impl InteractionState {
    #[must_use]
    pub fn zoom(self) -> ZoomLevel {
        self.zoom
    }

    /// Returns `true` when the level actually changed.
    pub fn set_zoom(&mut self, zoom: ZoomLevel) -> bool {
        if self.zoom == zoom {
            return false;
        }
        trace!(from = %self.zoom, to = %zoom, "zoom changed");
        self.zoom = zoom;
        true
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Canvas-local pointer y while tracking; picks the hovered row.
    #[must_use]
    pub fn pointer_y(self) -> Option<f64> {
        self.hover.is_tracking().then_some(self.pointer_y)
    }

    /// Pointer moved inside the canvas; coordinates are canvas-local.
    ///
    /// Non-finite coordinates cannot come from a real pointer and are ignored.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.pointer_y = y;
        self.hover = HoverState::Tracking(x);
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, InteractionState};
    use crate::core::ZoomLevel;

    #[test]
    fn starts_idle_at_default_zoom() {
        let state = InteractionState::default();
        assert_eq!(state.hover(), HoverState::Idle);
        assert_eq!(state.zoom(), ZoomLevel::DEFAULT);
    }

    #[test]
    fn move_then_leave_returns_to_idle() {
        let mut state = InteractionState::default();
        state.on_pointer_move(120.0, 40.0);
        assert_eq!(state.hover(), HoverState::Tracking(120.0));
        state.on_pointer_move(140.0, 44.0);
        assert_eq!(state.hover().pointer_x(), Some(140.0));
        assert_eq!(state.pointer_y(), Some(44.0));
        state.on_pointer_leave();
        assert!(!state.hover().is_tracking());
        assert_eq!(state.pointer_y(), None);
    }

    #[test]
    fn non_finite_move_is_ignored() {
        let mut state = InteractionState::default();
        state.on_pointer_move(f64::NAN, 10.0);
        assert_eq!(state.hover(), HoverState::Idle);
    }

    #[test]
    fn set_zoom_reports_changes_only() {
        let mut state = InteractionState::default();
        assert!(!state.set_zoom(ZoomLevel::DEFAULT));
        assert!(state.set_zoom(ZoomLevel::MAX));
    }

    #[test]
    fn hover_state_serializes_with_tag() {
        let json = serde_json::to_string(&HoverState::Tracking(12.5)).expect("json");
        assert_eq!(json, r#"{"state":"tracking","x":12.5}"#);
        let json = serde_json::to_string(&HoverState::Idle).expect("json");
        assert_eq!(json, r#"{"state":"idle"}"#);
    }
}
