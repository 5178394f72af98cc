// File: crates/chart-core/src/series.rs
// Summary: Labeled XY line series with per-series stroke styling.

use crate::downsample::lttb;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend entry; also used to pick the palette slot order.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
    /// Stroke opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_data(label, Vec::new())
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, stroke_width: 1.5, alpha: 1.0 }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn len(&self) -> usize {
        self.data_xy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    /// `(x_min, x_max, y_min, y_max)` over finite points, `None` when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.data_xy
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc, &(x, y)| match acc {
                None => Some((x, x, y, y)),
                Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
            })
    }

    /// Downsample with LTTB to at most `max_points`, keeping label and styling.
    /// Both endpoints are always kept, so limits below 2 are raised to 2.
    pub fn downsample_lttb(&self, max_points: usize) -> Self {
        let max_points = max_points.max(2);
        let data = if self.data_xy.len() > max_points {
            lttb(&self.data_xy, max_points)
        } else {
            self.data_xy.clone()
        };
        Series { data_xy: data, label: self.label.clone(), ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_skip_non_finite() {
        let s = Series::with_data("a", vec![(0.0, 1.0), (f64::NAN, 9.0), (2.0, -1.0)]);
        assert_eq!(s.bounds(), Some((0.0, 2.0, -1.0, 1.0)));
        assert_eq!(Series::new("empty").bounds(), None);
    }

    #[test]
    fn downsample_keeps_style() {
        let data = (0..1_000).map(|i| (i as f64, (i % 7) as f64)).collect();
        let s = Series::with_data("line_0", data).with_alpha(0.8).with_stroke_width(1.0);
        let d = s.downsample_lttb(100);
        assert_eq!(d.len(), 100);
        assert_eq!(d.label, "line_0");
        assert_eq!(d.alpha, 0.8);
        assert_eq!(d.stroke_width, 1.0);
    }

    #[test]
    fn downsample_limit_below_two_keeps_endpoints() {
        let data: Vec<(f64, f64)> = (0..50).map(|i| (i as f64, (i * i) as f64)).collect();
        let s = Series::with_data("a", data);
        for limit in [0, 1, 2] {
            let d = s.downsample_lttb(limit);
            assert_eq!(d.data_xy, vec![(0.0, 0.0), (49.0, 2401.0)]);
        }
    }
}
