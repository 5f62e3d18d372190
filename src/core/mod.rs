pub mod scale;
pub mod ticks;
pub mod types;
pub mod year_scale;
pub mod zoom;

pub use scale::LinearScale;
pub use ticks::{MAX_TICK_COUNT, MAX_TICK_OUTPUT, nice_ticks};
pub use types::Viewport;
pub use year_scale::YearScale;
pub use zoom::ZoomLevel;
