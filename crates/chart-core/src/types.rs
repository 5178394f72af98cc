// File: crates/chart-core/src/types.rs
// Summary: Shared constants (figure size) and screen margins.

/// Default surface width in pixels (12 in at 100 dpi).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for y tick labels and label on the left, title on top, x ticks and label below.
    fn default() -> Self {
        Self::new(80, 24, 48, 64)
    }
}
