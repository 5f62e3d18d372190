//! poet-timeline: life-span timeline chart of Tang-dynasty poets.
//!
//! The crate keeps a strict split between the static dataset, the year/pixel
//! math, the transient interaction state and the backends that draw a fully
//! materialized frame. Every state change re-derives the whole frame, so the
//! output is a pure function of (dataset, zoom level, hover position).

pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{TimelineChart, TimelineStyle};
pub use dataset::{Dataset, Era, Poet, TimelineLayout};
pub use error::{TimelineError, TimelineResult};
