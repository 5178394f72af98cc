// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the API for building and rendering grouped line charts.

pub mod axis;
pub mod chart;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod palette;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions, RgbaImage};
pub use downsample::lttb;
pub use error::{ChartError, Result};
pub use legend::{Legend, LegendPosition};
pub use palette::Palette;
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
