//! Chart facade and frame builders.

mod axis_frame_builder;
mod bar_geometry;
mod chart;
mod entity_frame_builder;
mod guide_frame_builder;
mod render_frame_builder;
mod render_style;
mod snapshot;

pub use bar_geometry::BarGeometry;
pub use chart::TimelineChart;
pub use render_style::TimelineStyle;
pub use snapshot::{BarSnapshot, TimelineSnapshot};

pub use crate::core::{YearScale, ZoomLevel};
pub use crate::dataset::{LegendEntry, legend_entries};
pub use crate::interaction::HoverState;
