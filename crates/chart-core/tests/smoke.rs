// File: crates/chart-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing a PNG with title, labels and legend.

use chart_core::{Axis, Chart, Legend, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X-axis", 0.0, 4.0);
    chart.y_axis = Axis::new("Y-axis", 0.0, 4.0);
    chart.legend = Some(Legend::with_title("Line"));
    chart.add_series(Series::with_data(
        "line_0",
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    chart.add_series(Series::with_data("line_1", vec![(0.0, 3.0), (4.0, 0.5)]).with_alpha(0.8));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let written = chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(written > 0, "png should be non-empty");
    assert_eq!(meta.len(), written as u64);

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(decoded.dimensions(), (opts.width as u32, opts.height as u32));
}

#[test]
fn rejects_empty_surface() {
    let chart = Chart::new();
    let opts = RenderOptions { width: 0, ..RenderOptions::default() };
    assert!(matches!(
        chart.render_to_rgba8(&opts),
        Err(chart_core::ChartError::InvalidSize { width: 0, .. })
    ));
}

#[test]
fn unwritable_output_is_an_io_error() {
    let chart = Chart::new();
    let opts = RenderOptions { width: 20, height: 10, draw_labels: false, ..RenderOptions::default() };
    // parent "directory" is a regular file
    let out = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml/out.png");
    assert!(matches!(chart.render_to_png(&opts, &out), Err(chart_core::ChartError::Io(_))));
}
