// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, data range and tick density.

use crate::grid::nice_ticks;

/// Default upper bound on the number of tick intervals per axis.
pub const DEFAULT_MAX_TICKS: usize = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub max_ticks: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, max_ticks: DEFAULT_MAX_TICKS }
    }

    pub fn default_x() -> Self {
        Self::new("x", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("y", 0.0, 1.0)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Data span, never zero so it can be used as a divisor.
    pub fn span(&self) -> f64 {
        (self.max - self.min).abs().max(1e-9)
    }

    /// Tick values falling inside `[min, max]`.
    pub fn ticks(&self) -> Vec<f64> {
        nice_ticks(self.min, self.max, self.max_ticks)
            .into_iter()
            .filter(|&t| t >= self.min - self.span() * 1e-9 && t <= self.max + self.span() * 1e-9)
            .collect()
    }
}

/// Format a tick value with just enough decimals for the tick spacing.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step.is_finite() && step > 0.0 {
        while decimals < 10 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0) {
                break;
            }
            decimals += 1;
        }
    }
    let v = if value.abs() < step.abs() * 1e-6 { 0.0 } else { value };
    format!("{v:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_stay_within_range() {
        let a = Axis::new("x", 0.0, 10.0);
        let t = a.ticks();
        assert_eq!(t.first().copied(), Some(0.0));
        assert_eq!(t.last().copied(), Some(10.0));
        assert!(t.iter().all(|&v| (0.0..=10.0).contains(&v)));
    }

    #[test]
    fn tick_labels_follow_step() {
        assert_eq!(format_tick(2.0, 2.0), "2");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-1e-17, 0.25), "0.00");
        assert_eq!(format_tick(1.25, 0.25), "1.25");
    }
}
