// File: crates/multiline/src/config.rs
// Summary: Plot driver configuration (figure, styling, output) with defaults.

use std::path::PathBuf;

use chart_core::types::Insets;
use chart_core::{palette, theme, RenderOptions};

#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Figure size in pixels (12x6 in at 100 dpi by default).
    pub width: i32,
    pub height: i32,
    /// Theme preset name, see `chart_core::theme::presets`.
    pub theme: String,
    /// Palette name for the line colors, in label order.
    pub palette: String,
    pub line_width: f32,
    pub alpha: f32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend title; `None` still draws the legend, just without a title row.
    pub legend_title: Option<String>,
    /// Legend corner name (`"best"`, `"upper right"`, ...), see `LegendPosition::parse`.
    pub legend_position: String,
    /// Fraction of the y span added above and below the data.
    pub y_margin: f64,
    /// Downsample each line with LTTB to at most this many points before drawing.
    pub downsample: Option<usize>,
    pub draw_labels: bool,
    pub output: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            theme: "whitegrid".to_owned(),
            palette: "tab10".to_owned(),
            line_width: 1.0,
            alpha: 0.8,
            title: "Multiline Plot".to_owned(),
            x_label: "X-axis".to_owned(),
            y_label: "Y-axis".to_owned(),
            legend_title: Some("Line".to_owned()),
            legend_position: "best".to_owned(),
            y_margin: 0.05,
            downsample: None,
            draw_labels: true,
            output: PathBuf::from("target/out/multiline.png"),
        }
    }
}

impl PlotConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            insets: Insets::default(),
            theme: theme::find(&self.theme),
            palette: palette::find(&self.palette),
            draw_labels: self.draw_labels,
        }
    }
}
