// File: crates/multiline/src/frame.rs
// Summary: Column-oriented table of labeled sample points (x, y, line).

use std::ops::Range;

/// One row of a [`MultilineFrame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint<'a> {
    pub x: f64,
    pub y: f64,
    pub line_id: &'a str,
}

/// Rows of one line, which are contiguous in a generated frame.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGroup<'a> {
    pub label: &'a str,
    pub rows: Range<usize>,
}

/// Table with columns `x`, `y` and `line`; all three always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultilineFrame {
    x: Vec<f64>,
    y: Vec<f64>,
    line: Vec<String>,
}

impl MultilineFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize) -> Self {
        Self { x: Vec::with_capacity(rows), y: Vec::with_capacity(rows), line: Vec::with_capacity(rows) }
    }

    /// Append one row.
    pub fn push(&mut self, x: f64, y: f64, line: &str) {
        self.x.push(x);
        self.y.push(y);
        self.line.push(line.to_owned());
    }

    /// Stack frames in order; row numbering of the result is contiguous.
    pub fn concat<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = MultilineFrame>,
    {
        let frames: Vec<MultilineFrame> = frames.into_iter().collect();
        let mut out = Self::with_capacity(frames.iter().map(Self::len).sum());
        for f in frames {
            out.x.extend(f.x);
            out.y.extend(f.y);
            out.line.extend(f.line);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn line(&self) -> &[String] {
        &self.line
    }

    pub fn row(&self, i: usize) -> Option<SamplePoint<'_>> {
        Some(SamplePoint { x: *self.x.get(i)?, y: self.y[i], line_id: self.line[i].as_str() })
    }

    pub fn rows(&self) -> impl Iterator<Item = SamplePoint<'_>> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.line)
            .map(|((&x, &y), l)| SamplePoint { x, y, line_id: l.as_str() })
    }

    /// Runs of consecutive rows sharing a label, in row order.
    pub fn groups(&self) -> Vec<LineGroup<'_>> {
        let mut groups: Vec<LineGroup<'_>> = Vec::new();
        for (i, label) in self.line.iter().enumerate() {
            let same = matches!(groups.last(), Some(g) if g.label == label.as_str());
            if !same {
                groups.push(LineGroup { label: label.as_str(), rows: i..i });
            }
            if let Some(g) = groups.last_mut() {
                g.rows.end = i + 1;
            }
        }
        groups
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for g in self.groups() {
            if !seen.contains(&g.label) {
                seen.push(g.label);
            }
        }
        seen
    }

    /// `(x, y)` pairs for every row labeled `label`, in row order.
    pub fn xy_for(&self, label: &str) -> Vec<(f64, f64)> {
        self.rows().filter(|r| r.line_id == label).map(|r| (r.x, r.y)).collect()
    }

    /// `(min, max)` of the `y` column over finite values.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y.iter().copied().filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Convert into a polars `DataFrame` with columns `x`, `y`, `line`.
    #[cfg(feature = "polars")]
    pub fn to_polars(&self) -> crate::error::Result<polars::prelude::DataFrame> {
        use polars::prelude::*;
        let df = df!(
            "x" => &self.x,
            "y" => &self.y,
            "line" => &self.line,
        )?;
        Ok(df)
    }
}
