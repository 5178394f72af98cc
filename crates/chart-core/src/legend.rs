// File: crates/chart-core/src/legend.rs
// Summary: Legend model and box placement inside the plot area.

use crate::geometry::PlotRect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    /// Corner overlapping the fewest data points.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendPosition {
    const CORNERS: [LegendPosition; 4] = [
        LegendPosition::UpperRight,
        LegendPosition::UpperLeft,
        LegendPosition::LowerLeft,
        LegendPosition::LowerRight,
    ];

    /// Parse a position name (`"best"`, `"upper right"`, `"upper-left"`, ...); unknown names map to `Best`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "upper right" => Self::UpperRight,
            "upper left" => Self::UpperLeft,
            "lower left" => Self::LowerLeft,
            "lower right" => Self::LowerRight,
            _ => Self::Best,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: Option<String>,
    pub position: LegendPosition,
    pub font_size: f32,
}

impl Default for Legend {
    fn default() -> Self {
        Self { title: None, position: LegendPosition::Best, font_size: 12.0 }
    }
}

impl Legend {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self { title: Some(title.into()), ..Self::default() }
    }

    pub fn at(mut self, position: LegendPosition) -> Self {
        self.position = position;
        self
    }
}

/// Pixel metrics of a laid-out legend box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendBox {
    pub rect: PlotRect,
    pub row_height: f32,
    pub padding: f32,
    pub swatch_width: f32,
    /// Height taken by the title row, 0 without title.
    pub title_height: f32,
}

const PAD: f32 = 8.0;
const SWATCH: f32 = 24.0;
const GAP: f32 = 6.0;
const MARGIN: f32 = 10.0;

impl LegendBox {
    /// Box sized for `entries` labels of the given text widths.
    pub fn measure(legend: &Legend, title_width: Option<f32>, label_widths: &[f32]) -> (f32, f32, f32) {
        let row_height = legend.font_size * 1.5;
        let widest = label_widths.iter().copied().fold(0.0f32, f32::max);
        let mut w = SWATCH + GAP + widest;
        let mut title_height = 0.0;
        if let Some(tw) = title_width {
            w = w.max(tw);
            title_height = row_height;
        }
        let h = title_height + row_height * label_widths.len() as f32;
        (w + 2.0 * PAD, h + 2.0 * PAD, title_height)
    }

    /// Place a `w` x `h` box in `area`. For [`LegendPosition::Best`], `occupancy`
    /// returns how many data points fall inside a candidate rectangle.
    pub fn place<F>(legend: &Legend, area: &PlotRect, size: (f32, f32, f32), occupancy: F) -> Self
    where
        F: Fn(&PlotRect) -> usize,
    {
        let (w, h, title_height) = size;
        let at = |pos: LegendPosition| -> PlotRect {
            let (left, top) = match pos {
                LegendPosition::UpperLeft => (area.left + MARGIN, area.top + MARGIN),
                LegendPosition::LowerLeft => (area.left + MARGIN, area.bottom - MARGIN - h),
                LegendPosition::LowerRight => (area.right - MARGIN - w, area.bottom - MARGIN - h),
                LegendPosition::UpperRight | LegendPosition::Best => (area.right - MARGIN - w, area.top + MARGIN),
            };
            PlotRect::from_ltrb(left, top, left + w, top + h)
        };
        let rect = match legend.position {
            LegendPosition::Best => {
                // first corner wins ties, so an empty chart gets upper right
                let mut best = (usize::MAX, at(LegendPosition::UpperRight));
                for pos in LegendPosition::CORNERS {
                    let r = at(pos);
                    let n = occupancy(&r);
                    if n < best.0 {
                        best = (n, r);
                    }
                }
                best.1
            }
            pos => at(pos),
        };
        Self {
            rect,
            row_height: legend.font_size * 1.5,
            padding: PAD,
            swatch_width: SWATCH,
            title_height,
        }
    }

    /// Vertical center of the `i`-th entry row.
    pub fn row_center(&self, i: usize) -> f32 {
        self.rect.top + self.padding + self.title_height + self.row_height * (i as f32 + 0.5)
    }

    /// Left edge of entry label text.
    pub fn label_left(&self) -> f32 {
        self.rect.left + self.padding + self.swatch_width + GAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotRect {
        PlotRect::from_ltrb(0.0, 0.0, 400.0, 200.0)
    }

    #[test]
    fn parse_names() {
        assert_eq!(LegendPosition::parse("upper-left"), LegendPosition::UpperLeft);
        assert_eq!(LegendPosition::parse("Lower Right"), LegendPosition::LowerRight);
        assert_eq!(LegendPosition::parse("whatever"), LegendPosition::Best);
    }

    #[test]
    fn measure_accounts_for_title() {
        let lg = Legend::with_title("Line");
        let (w, h, th) = LegendBox::measure(&lg, Some(30.0), &[40.0, 40.0, 40.0]);
        assert_eq!(th, 18.0);
        assert_eq!(h, 18.0 * 4.0 + 16.0);
        assert_eq!(w, SWATCH + GAP + 40.0 + 16.0);
    }

    #[test]
    fn fixed_corner() {
        let lg = Legend::default().at(LegendPosition::LowerLeft);
        let b = LegendBox::place(&lg, &area(), (100.0, 50.0, 0.0), |_| 0);
        assert_eq!(b.rect, PlotRect::from_ltrb(10.0, 140.0, 110.0, 190.0));
    }

    #[test]
    fn best_avoids_crowded_corners() {
        let lg = Legend::default();
        // only the lower-left corner is empty
        let b = LegendBox::place(&lg, &area(), (100.0, 50.0, 0.0), |r| {
            if r.left < 200.0 && r.top > 100.0 { 0 } else { 10 }
        });
        assert_eq!(b.rect.left, 10.0);
        assert_eq!(b.rect.bottom, 190.0);
    }
}
