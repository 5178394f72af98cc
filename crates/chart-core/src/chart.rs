// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use image::ImageEncoder;
use log::debug;
use skia_safe as skia;

use crate::axis::{format_tick, Axis};
use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::grid::tick_step;
use crate::legend::{Legend, LegendBox};
use crate::palette::Palette;
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 13.0;
const TICK_SIZE: f32 = 11.0;
const TICK_LEN: f32 = 5.0;
/// Points sampled per series when scoring legend placement.
const OCCUPANCY_SAMPLES: usize = 2_000;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Colors for series without an explicit color, assigned in series order.
    pub palette: Palette,
    /// Render title, axis labels, tick labels and legend text. Off for
    /// pixel-exact snapshots, since font availability differs per platform.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            palette: Palette::default(),
            draw_labels: true,
        }
    }
}

/// Unpremultiplied RGBA8 pixels, rows top to bottom.
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbaImage {
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride() + x as usize * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Fit both axes to the data: x tight, y padded by `y_margin` times its span.
    /// Without data the axes fall back to `[0, 1]`; a zero span is widened by 0.5 each way.
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        let bounds = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        let Some((x_min, x_max, y_min, y_max)) = bounds else {
            (self.x_axis.min, self.x_axis.max) = (0.0, 1.0);
            (self.y_axis.min, self.y_axis.max) = (0.0, 1.0);
            return;
        };
        let widen = |lo: f64, hi: f64| if hi - lo < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        (self.x_axis.min, self.x_axis.max) = widen(x_min, x_max);
        let (lo, hi) = widen(y_min, y_max);
        let m = (hi - lo) * y_margin.max(0.0);
        (self.y_axis.min, self.y_axis.max) = (lo - m, hi + m);
    }

    /// Render into an RGBA8 buffer using a CPU raster surface.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<RgbaImage> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(ChartError::InvalidSize { width: opts.width, height: opts.height });
        }
        let (width, height) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;

        let shaper = opts.draw_labels.then(TextShaper::new);
        self.draw(surface.canvas(), opts, shaper.as_ref());

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        debug!(
            "rendered {} series ({} points) to {}x{}",
            self.series.len(),
            self.point_count(),
            width,
            height
        );
        Ok(RgbaImage { pixels, width: width as u32, height: height as u32 })
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let img = self.render_to_rgba8(opts)?;
        let mut bytes = Vec::new();
        image::codecs::png::PngEncoder::new(&mut bytes).write_image(
            &img.pixels,
            img.width,
            img.height,
            image::ExtendedColorType::Rgba8,
        )?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    /// Returns the number of bytes written.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<usize> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &data)?;
        debug!("wrote {} ({} bytes)", path.display(), data.len());
        Ok(data.len())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: Option<&TextShaper>) {
        let theme = &opts.theme;
        let area = PlotRect::inset(opts.width, opts.height, &opts.insets);
        let sx = LinearScale::x(&self.x_axis, &area);
        let sy = LinearScale::y(&self.y_axis, &area);
        let x_ticks = self.x_axis.ticks();
        let y_ticks = self.y_axis.ticks();

        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(area.to_skia(), &fill);

        if let Some(grid) = theme.grid {
            draw_grid(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, grid);
        }
        if let Some(spine) = theme.spine {
            draw_frame(canvas, &area, spine);
        }

        canvas.save();
        canvas.clip_rect(area.to_skia(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = opts.palette.get(i);
            draw_line_series(canvas, &sx, &sy, s, color);
        }
        canvas.restore();

        if theme.tick_marks {
            draw_tick_marks(canvas, &area, &sx, &sy, &x_ticks, &y_ticks, theme.text);
        }
        if let Some(shaper) = text {
            self.draw_labels(canvas, shaper, opts, &area, &sx, &sy, &x_ticks, &y_ticks);
        }
        if let Some(legend) = &self.legend {
            if !self.series.is_empty() {
                self.draw_legend(canvas, legend, opts, &area, &sx, &sy, text);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_labels(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        opts: &RenderOptions,
        area: &PlotRect,
        sx: &LinearScale,
        sy: &LinearScale,
        x_ticks: &[f64],
        y_ticks: &[f64],
    ) {
        let theme = &opts.theme;
        let pad = if theme.tick_marks { TICK_LEN + 4.0 } else { 6.0 };

        let x_step = tick_step(x_ticks);
        for &t in x_ticks {
            let label = format_tick(t, x_step);
            shaper.draw(canvas, &label, sx.to_px(t), area.bottom + pad + TICK_SIZE * 0.6, TICK_SIZE, theme.tick_label, Anchor::Center, false);
        }
        let y_step = tick_step(y_ticks);
        for &t in y_ticks {
            let label = format_tick(t, y_step);
            shaper.draw(canvas, &label, area.left - pad, sy.to_px(t), TICK_SIZE, theme.tick_label, Anchor::Right, false);
        }

        let mid_x = (area.left + area.right) * 0.5;
        let mid_y = (area.top + area.bottom) * 0.5;
        if !self.x_axis.label.is_empty() {
            shaper.draw(canvas, &self.x_axis.label, mid_x, area.bottom + pad + TICK_SIZE + 18.0, LABEL_SIZE, theme.text, Anchor::Center, false);
        }
        if !self.y_axis.label.is_empty() {
            shaper.draw_vertical(canvas, &self.y_axis.label, LABEL_SIZE, mid_y, LABEL_SIZE, theme.text);
        }
        if let Some(title) = &self.title {
            shaper.draw(canvas, title, mid_x, area.top * 0.5, TITLE_SIZE, theme.text, Anchor::Center, true);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        legend: &Legend,
        opts: &RenderOptions,
        area: &PlotRect,
        sx: &LinearScale,
        sy: &LinearScale,
        text: Option<&TextShaper>,
    ) {
        let theme = &opts.theme;
        let size = legend.font_size;
        // without a shaper, estimate widths so the box layout stays deterministic
        let measure = |s: &str| match text {
            Some(shaper) => shaper.measure_width(s, size),
            None => s.chars().count() as f32 * size * 0.6,
        };
        let widths: Vec<f32> = self.series.iter().map(|s| measure(&s.label)).collect();
        let title_w = legend.title.as_deref().map(measure);
        let dims = LegendBox::measure(legend, title_w, &widths);

        let occupancy = |r: &PlotRect| -> usize {
            self.series
                .iter()
                .map(|s| {
                    let step = (s.len() / OCCUPANCY_SAMPLES).max(1);
                    s.data_xy
                        .iter()
                        .step_by(step)
                        .filter(|&&(x, y)| {
                            let (px, py) = (sx.to_px(x), sy.to_px(y));
                            px >= r.left && px <= r.right && py >= r.top && py <= r.bottom
                        })
                        .count()
                })
                .sum()
        };
        let lb = LegendBox::place(legend, area, dims, occupancy);

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.legend_background);
        let rrect = skia::RRect::new_rect_xy(lb.rect.to_skia(), 3.0, 3.0);
        canvas.draw_rrect(&rrect, &bg);
        bg.set_style(skia::paint::Style::Stroke);
        bg.set_stroke_width(1.0);
        bg.set_color(theme.legend_border);
        canvas.draw_rrect(&rrect, &bg);

        if let (Some(shaper), Some(title)) = (text, legend.title.as_deref()) {
            let cy = lb.rect.top + lb.padding + lb.title_height * 0.5;
            shaper.draw(canvas, title, (lb.rect.left + lb.rect.right) * 0.5, cy, size, theme.text, Anchor::Center, false);
        }

        let mut swatch = skia::Paint::default();
        swatch.set_anti_alias(true);
        swatch.set_style(skia::paint::Style::Stroke);
        for (i, s) in self.series.iter().enumerate() {
            let cy = lb.row_center(i);
            let x0 = lb.rect.left + lb.padding;
            swatch.set_stroke_width(s.stroke_width.max(1.0) * 1.5);
            swatch.set_color(with_alpha(opts.palette.get(i), s.alpha));
            canvas.draw_line((x0, cy), (x0 + lb.swatch_width, cy), &swatch);
            if let Some(shaper) = text {
                shaper.draw(canvas, &s.label, lb.label_left(), cy, size, theme.text, Anchor::Left, false);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    color.with_a((alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn draw_grid(
    canvas: &skia::Canvas,
    area: &PlotRect,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &t in x_ticks {
        let x = sx.to_px(t);
        canvas.draw_line((x, area.top), (x, area.bottom), &paint);
    }
    for &t in y_ticks {
        let y = sy.to_px(t);
        canvas.draw_line((area.left, y), (area.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, area: &PlotRect, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.25);
    canvas.draw_rect(area.to_skia(), &paint);
}

fn draw_tick_marks(
    canvas: &skia::Canvas,
    area: &PlotRect,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    color: skia::Color,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for &t in x_ticks {
        let x = sx.to_px(t);
        canvas.draw_line((x, area.bottom), (x, area.bottom + TICK_LEN), &paint);
    }
    for &t in y_ticks {
        let y = sy.to_px(t);
        canvas.draw_line((area.left - TICK_LEN, y), (area.left, y), &paint);
    }
}

/// Stroke a series as one path; non-finite points split it into separate runs.
/// A lone point is drawn as a dot.
fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let color = with_alpha(color, series.alpha);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);

    let mut finite = series.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
    if let (Some(&(x, y)), None) = (finite.next(), finite.next()) {
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), series.stroke_width.max(1.0) * 1.5, &paint);
        return;
    }

    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !(x.is_finite() && y.is_finite()) {
            pen_down = false;
            continue;
        }
        let p = (sx.to_px(x), sy.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(series.stroke_width);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &paint);
}
