// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::PlotRect;

/// Maps an axis range onto a pixel interval. Y scales are built with the
/// pixel interval flipped so larger values sit higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    vmin: f64,
    span: f64,
    px0: f32,
    px1: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px0: f32, px1: f32) -> Self {
        let span = vmax - vmin;
        let span = if span.abs() < 1e-12 { 1.0 } else { span };
        Self { vmin, span, px0, px1 }
    }

    pub fn x(axis: &Axis, area: &PlotRect) -> Self {
        Self::new(axis.min, axis.max, area.left, area.right)
    }

    pub fn y(axis: &Axis, area: &PlotRect) -> Self {
        Self::new(axis.min, axis.max, area.bottom, area.top)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.px0 + ((v - self.vmin) / self.span) as f32 * (self.px1 - self.px0)
    }
}
