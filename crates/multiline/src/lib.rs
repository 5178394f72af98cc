// File: crates/multiline/src/lib.rs
// Summary: Synthetic multiline data generation and the grouped line chart driver.

pub mod config;
pub mod driver;
pub mod error;
pub mod frame;
pub mod generate;

pub use config::PlotConfig;
pub use driver::{build_chart, plot, plot_with, render_frame, PlotReport};
pub use error::{BenchError, DataError, Result};
pub use frame::{LineGroup, MultilineFrame, SamplePoint};
pub use generate::{
    generate, generate_seeded, generate_with_rng, line_label, GeneratorConfig, DEFAULT_LINES, DEFAULT_POINTS,
};
