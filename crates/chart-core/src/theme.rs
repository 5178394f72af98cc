// File: crates/chart-core/src/theme.rs
// Summary: Seaborn-style figure themes (whitegrid, darkgrid, white, dark, ticks).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Figure background, outside the plot area.
    pub background: skia::Color,
    /// Plot area fill.
    pub plot_background: skia::Color,
    /// Grid line color; `None` disables the grid.
    pub grid: Option<skia::Color>,
    /// Axes frame color; `None` hides the frame.
    pub spine: Option<skia::Color>,
    pub text: skia::Color,
    pub tick_label: skia::Color,
    /// Draw short tick marks outside the frame.
    pub tick_marks: bool,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

const WHITE: skia::Color = skia::Color::WHITE;
const AXES_GRAY: skia::Color = skia::Color::from_argb(255, 0xea, 0xea, 0xf2);
const LIGHT: skia::Color = skia::Color::from_argb(255, 204, 204, 204);
const DARK_TEXT: skia::Color = skia::Color::from_argb(255, 38, 38, 38);

impl Theme {
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: WHITE,
            plot_background: WHITE,
            grid: Some(LIGHT),
            spine: Some(LIGHT),
            text: DARK_TEXT,
            tick_label: DARK_TEXT,
            tick_marks: false,
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: LIGHT,
        }
    }

    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            plot_background: AXES_GRAY,
            grid: Some(WHITE),
            spine: None,
            ..Self::whitegrid()
        }
    }

    pub fn white() -> Self {
        Self {
            name: "white",
            grid: None,
            spine: Some(DARK_TEXT),
            ..Self::whitegrid()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            plot_background: AXES_GRAY,
            grid: None,
            spine: None,
            ..Self::whitegrid()
        }
    }

    pub fn ticks() -> Self {
        Self {
            name: "ticks",
            tick_marks: true,
            ..Self::white()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::whitegrid()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::whitegrid(),
        Theme::darkgrid(),
        Theme::white(),
        Theme::dark(),
        Theme::ticks(),
    ]
}

/// Find a theme by its `name`, falling back to whitegrid.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("DarkGrid").name, "darkgrid");
        assert_eq!(find("unknown").name, "whitegrid");
    }

    #[test]
    fn whitegrid_has_grid_on_white() {
        let t = Theme::whitegrid();
        assert_eq!(t.plot_background, skia::Color::WHITE);
        assert!(t.grid.is_some());
        assert!(Theme::white().grid.is_none());
        assert!(Theme::ticks().tick_marks);
    }
}
