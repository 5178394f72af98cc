// File: crates/chart-core/src/error.rs
// Summary: Error type for chart rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Width or height is not strictly positive.
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
