// File: crates/multiline/src/error.rs
// Summary: Error types for data generation and the plot driver.

use thiserror::Error;

/// Invalid generator parameters.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoise(f64),

    #[error("x range must be finite, got [{start}, {end}]")]
    InvalidRange { start: f64, end: f64 },
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Data(#[from] DataError),

    /// Zero lines or zero points leave nothing to draw.
    #[error("nothing to plot: {lines} line(s) with {points} point(s) each")]
    EmptyData { lines: usize, points: usize },

    #[error("rendering failed: {0}")]
    Render(#[from] chart_core::ChartError),

    #[cfg(feature = "polars")]
    #[error("polars: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
