// File: crates/chart-core/src/grid.rs
// Summary: Evenly spaced sampling and "nice" tick location for axis grids.

/// Multipliers tried, in order, for each power of ten when picking a tick step.
const NICE_STEPS: &[f64] = &[1.0, 2.0, 2.5, 5.0, 10.0];

/// `n` evenly spaced values over `[start, end]`, both endpoints included.
///
/// `n == 0` gives an empty vector and `n == 1` gives `[start]`. The last
/// value is exactly `end` so grouped series line up on the same x values.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            v[n - 1] = end;
            v
        }
    }
}

/// Round tick positions covering `[min, max]` with at most about `max_bins` intervals.
///
/// The first tick is `<= min` and the last is `>= max`; callers that only want
/// ticks inside the range filter afterwards (see [`crate::Axis::ticks`]).
pub fn nice_ticks(min: f64, max: f64, max_bins: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = hi - lo;
    if span <= 0.0 {
        return vec![lo];
    }
    let step = nice_step(span / max_bins.max(1) as f64);
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Tick spacing chosen by [`nice_ticks`] for the same inputs.
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

fn nice_step(target: f64) -> f64 {
    let scale = 10f64.powf(target.log10().floor());
    NICE_STEPS
        .iter()
        .map(|m| m * scale)
        .find(|&s| s >= target * (1.0 - 1e-12))
        .unwrap_or(10.0 * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        assert!(linspace(0.0, 10.0, 0).is_empty());
        assert_eq!(linspace(0.0, 10.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 10.0, 2), vec![0.0, 10.0]);
        let v = linspace(0.0, 10.0, 4);
        assert_eq!(v.len(), 4);
        assert!((v[1] - 10.0 / 3.0).abs() < 1e-12);
        assert_eq!(v[3], 10.0);
    }

    #[test]
    fn nice_ticks_unit_range() {
        assert_eq!(nice_ticks(0.0, 10.0, 8), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn nice_ticks_cover_range() {
        let t = nice_ticks(-1.37, 1.42, 8);
        assert!(t[0] <= -1.37);
        assert!(*t.last().unwrap() >= 1.42);
        assert!((tick_step(&t) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn nice_ticks_degenerate() {
        assert_eq!(nice_ticks(3.0, 3.0, 8), vec![3.0]);
        assert!(nice_ticks(f64::NAN, 1.0, 8).is_empty());
    }
}
