use chart_core::{Chart, Legend, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_multiline(lines: usize, n: usize) -> Chart {
    let mut ch = Chart::new().with_title("bench");
    ch.legend = Some(Legend::with_title("Line"));
    for i in 0..lines {
        let phase = i as f64 * std::f64::consts::FRAC_PI_4;
        let data = (0..n)
            .map(|k| {
                let x = k as f64 * 10.0 / (n - 1) as f64;
                (x, (x + phase).sin())
            })
            .collect();
        ch.add_series(Series::with_data(format!("line_{i}"), data).with_stroke_width(1.0).with_alpha(0.8));
    }
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(10);
    for &n in &[10_000usize, 100_000usize] {
        group.bench_function(format!("3x{n}"), |b| {
            let ch = build_multiline(3, n);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| black_box(ch.render_to_png_bytes(&opts).expect("render")));
        });
        group.bench_function(format!("3x{n}_lttb2000"), |b| {
            let mut ch = build_multiline(3, n);
            ch.series = ch.series.iter().map(|s| s.downsample_lttb(2_000)).collect();
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| black_box(ch.render_to_png_bytes(&opts).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
