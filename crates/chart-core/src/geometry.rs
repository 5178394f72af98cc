// File: crates/chart-core/src/geometry.rs
// Summary: Plot-area rectangle in pixel space.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area left once `insets` are removed from a `width` x `height` surface.
    /// Degenerate surfaces collapse to a 1px area instead of inverting.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_default_figure() {
        let r = PlotRect::inset(1200, 600, &Insets::new(80, 20, 40, 60));
        assert_eq!(r, PlotRect::from_ltrb(80.0, 40.0, 1180.0, 540.0));
        assert_eq!(r.right - r.left, 1100.0);
        assert_eq!(r.bottom - r.top, 500.0);
    }

    #[test]
    fn inset_never_inverts() {
        let r = PlotRect::inset(10, 10, &Insets::new(80, 20, 40, 60));
        assert!(r.right > r.left);
        assert!(r.bottom > r.top);
    }
}
