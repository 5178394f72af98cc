// File: crates/multiline/tests/generate.rs
// Purpose: Row counts, labels, shared x grid and seeding of generated frames.

use multiline::{generate, generate_seeded, generate_with_rng, GeneratorConfig, MultilineFrame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn x_of_line(frame: &MultilineFrame, label: &str) -> Vec<f64> {
    frame.xy_for(label).into_iter().map(|(x, _)| x).collect()
}

#[test]
fn row_count_is_lines_times_points() {
    for &(l, p) in &[(1usize, 1usize), (1, 7), (3, 10), (5, 33), (10, 2)] {
        let f = generate(l, p);
        assert_eq!(f.len(), l * p, "{l} lines x {p} points");
    }
}

#[test]
fn labels_are_line_0_to_l_minus_1() {
    let f = generate(4, 25);
    assert_eq!(f.labels(), vec!["line_0", "line_1", "line_2", "line_3"]);
}

#[test]
fn every_line_shares_the_x_grid() {
    let f = generate(6, 50);
    let x0 = x_of_line(&f, "line_0");
    assert_eq!(x0.len(), 50);
    assert_eq!(x0[0], 0.0);
    assert_eq!(x0[49], 10.0);
    for i in 1..6 {
        assert_eq!(x_of_line(&f, &format!("line_{i}")), x0);
    }
}

#[test]
fn two_lines_four_points() {
    let f = generate(2, 4);
    assert_eq!(f.len(), 8);
    for (i, r) in f.rows().enumerate() {
        let want = if i < 4 { "line_0" } else { "line_1" };
        assert_eq!(r.line_id, want, "row {i}");
    }
    let expected = [0.0, 3.333, 6.667, 10.0];
    for (k, &x) in f.x().iter().enumerate() {
        let rounded = (x * 1000.0).round() / 1000.0;
        assert_eq!(rounded, expected[k % 4], "row {k}");
    }
}

#[test]
fn single_point_sits_at_range_start() {
    let f = generate(1, 1);
    assert_eq!(f.len(), 1);
    let r = f.row(0).expect("one row");
    assert_eq!(r.x, 0.0);
    assert_eq!(r.line_id, "line_0");
}

#[test]
fn zero_lines_or_points_give_empty_frame() {
    assert!(generate(0, 100).is_empty());
    assert!(generate(3, 0).is_empty());
}

#[test]
fn seeded_runs_repeat() {
    let a = generate_seeded(3, 1_000, 42);
    let b = generate_seeded(3, 1_000, 42);
    assert_eq!(a.y(), b.y());
    let c = generate_seeded(3, 1_000, 43);
    assert_ne!(a.y(), c.y());

    let cfg = GeneratorConfig::new(3, 1_000);
    let d = generate_with_rng(&cfg, &mut ChaCha8Rng::seed_from_u64(42)).expect("valid config");
    assert_eq!(a, d);
}

#[test]
fn unseeded_runs_differ() {
    let a = generate(2, 1_000);
    let b = generate(2, 1_000);
    assert_eq!(a.x(), b.x());
    assert_ne!(a.y(), b.y());
}

#[test]
fn noise_is_small_around_the_sine() {
    let f = generate_seeded(3, 20_000, 7);
    let n = f.len() as f64;
    let residuals: Vec<f64> = f
        .rows()
        .map(|r| {
            let i: f64 = r.line_id.trim_start_matches("line_").parse().expect("numeric suffix");
            r.y - (r.x + i * std::f64::consts::FRAC_PI_4).sin()
        })
        .collect();
    let mean = residuals.iter().sum::<f64>() / n;
    let std = (residuals.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert!(mean.abs() < 0.005, "mean {mean}");
    assert!((std - 0.1).abs() < 0.005, "std {std}");
}

#[cfg(feature = "polars")]
#[test]
fn converts_to_polars() {
    let f = generate_seeded(2, 5, 1);
    let df = f.to_polars().expect("dataframe");
    assert_eq!(df.shape(), (10, 3));
    for name in ["x", "y", "line"] {
        assert!(df.column(name).is_ok(), "missing column {name}");
    }
}

#[cfg(feature = "polars")]
#[test]
fn polars_errors_convert() {
    let err: multiline::BenchError = polars::prelude::PolarsError::ComputeError("boom".into()).into();
    assert!(matches!(err, multiline::BenchError::Polars(_)));
}
