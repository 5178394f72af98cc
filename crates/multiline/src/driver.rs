// File: crates/multiline/src/driver.rs
// Summary: Plot driver: generate a multiline frame once and render it as a grouped line chart.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chart_core::{Axis, Chart, Legend, LegendPosition, RgbaImage, Series};
use log::{debug, info};

use crate::config::PlotConfig;
use crate::error::{BenchError, Result};
use crate::frame::MultilineFrame;
use crate::generate::GeneratorConfig;

/// Outcome of one [`plot_with`] run.
#[derive(Clone, Debug)]
pub struct PlotReport {
    pub rows: usize,
    pub lines: usize,
    pub output: PathBuf,
    /// Size of the written PNG.
    pub bytes: u64,
    pub generate_time: Duration,
    pub render_time: Duration,
}

/// Generate `num_lines` x `num_points` rows and render them with the default config.
pub fn plot(num_lines: usize, num_points: usize) -> Result<PlotReport> {
    plot_with(&GeneratorConfig::new(num_lines, num_points), &PlotConfig::default())
}

pub fn plot_with(generator: &GeneratorConfig, config: &PlotConfig) -> Result<PlotReport> {
    let started = Instant::now();
    let frame = generator.generate()?;
    let generate_time = started.elapsed();
    info!(
        "generated {} rows across {} lines in {:.2?}",
        frame.len(),
        generator.num_lines,
        generate_time
    );
    if frame.is_empty() {
        return Err(BenchError::EmptyData { lines: generator.num_lines, points: generator.num_points });
    }

    let started = Instant::now();
    let chart = build_chart(&frame, config)?;
    let bytes = chart.render_to_png(&config.render_options(), &config.output)? as u64;
    let render_time = started.elapsed();
    info!("rendered {} in {:.2?} ({} bytes)", config.output.display(), render_time, bytes);

    Ok(PlotReport {
        rows: frame.len(),
        lines: chart.series.len(),
        output: config.output.clone(),
        bytes,
        generate_time,
        render_time,
    })
}

/// One series per `line` label, in first-appearance order, with axes fitted to the data.
pub fn build_chart(frame: &MultilineFrame, config: &PlotConfig) -> Result<Chart> {
    if frame.is_empty() {
        return Err(BenchError::EmptyData { lines: frame.labels().len(), points: 0 });
    }
    let mut chart = Chart::new().with_title(&config.title);
    chart.x_axis = Axis::default_x().with_label(&config.x_label);
    chart.y_axis = Axis::default_y().with_label(&config.y_label);
    chart.legend = Some(match &config.legend_title {
        Some(title) => Legend::with_title(title),
        None => Legend::default(),
    }
    .at(LegendPosition::parse(&config.legend_position)));

    for label in frame.labels() {
        let mut series = Series::with_data(label, frame.xy_for(label))
            .with_stroke_width(config.line_width)
            .with_alpha(config.alpha);
        if let Some(max_points) = config.downsample {
            let before = series.len();
            series = series.downsample_lttb(max_points);
            debug!("{label}: downsampled {before} -> {} points", series.len());
        }
        chart.add_series(series);
    }
    chart.autoscale_axes(config.y_margin);
    Ok(chart)
}

/// Render `frame` into an in-memory RGBA buffer without touching the filesystem.
pub fn render_frame(frame: &MultilineFrame, config: &PlotConfig) -> Result<RgbaImage> {
    let chart = build_chart(frame, config)?;
    Ok(chart.render_to_rgba8(&config.render_options())?)
}
