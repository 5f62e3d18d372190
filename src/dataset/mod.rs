//! Static dataset: ordered poets, era colors and layout constants.
//!
//! Nothing here validates life spans. A poet with `start > end` is accepted
//! and simply renders as a minimum-width bar.

mod era;
mod layout;
mod poets;

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TimelineResult;
use crate::render::Color;

pub use era::{Era, EraColor};
pub use layout::TimelineLayout;

/// One historical figure plotted as a life-span bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start: i32,
    pub end: i32,
    pub era: Era,
}

impl Poet {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        start: i32,
        end: i32,
        era: Era,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            start,
            end,
            era,
        }
    }
}

/// Legend row: swatch color plus era label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub era: Era,
    pub label: &'static str,
    pub hex: &'static str,
    pub color: Color,
}

/// Legend rows in era declaration order.
#[must_use]
pub fn legend_entries() -> [LegendEntry; 4] {
    Era::ALL.map(|era| {
        let color = era.color();
        LegendEntry {
            era,
            label: era.label(),
            hex: color.hex,
            color: color.color,
        }
    })
}

/// Ordered entities plus the layout they are drawn with.
///
/// Row placement follows `poets` order; the list is never sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub layout: TimelineLayout,
    pub poets: Vec<Poet>,
}

static BUILTIN: LazyLock<Dataset> = LazyLock::new(|| Dataset {
    layout: TimelineLayout::default(),
    poets: poets::BUILTIN_POETS
        .iter()
        .map(|record| {
            Poet::new(
                record.id,
                record.name,
                record.description,
                record.start,
                record.end,
                record.era,
            )
        })
        .collect(),
});

impl Dataset {
    #[must_use]
    pub fn new(layout: TimelineLayout, poets: Vec<Poet>) -> Self {
        Self { layout, poets }
    }

    /// Tang poets shipped with the crate, built once per process.
    #[must_use]
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    pub fn from_json_str(json: &str) -> TimelineResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        debug!(poets = dataset.poets.len(), "dataset parsed");
        Ok(dataset)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.poets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poets.is_empty()
    }

    #[must_use]
    pub fn poet(&self, id: &str) -> Option<&Poet> {
        self.poets.iter().find(|poet| poet.id == id)
    }
}
