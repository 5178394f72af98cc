// File: crates/chart-core/src/palette.rs
// Summary: Categorical color palettes for grouped series.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    colors: &'static [(u8, u8, u8)],
}

const TAB10: &[(u8, u8, u8)] = &[
    (0x1f, 0x77, 0xb4), // blue
    (0xff, 0x7f, 0x0e), // orange
    (0x2c, 0xa0, 0x2c), // green
    (0xd6, 0x27, 0x28), // red
    (0x94, 0x67, 0xbd), // purple
    (0x8c, 0x56, 0x4b), // brown
    (0xe3, 0x77, 0xc2), // pink
    (0x7f, 0x7f, 0x7f), // gray
    (0xbc, 0xbd, 0x22), // olive
    (0x17, 0xbe, 0xcf), // cyan
];

const DEEP: &[(u8, u8, u8)] = &[
    (0x4c, 0x72, 0xb0),
    (0xdd, 0x84, 0x52),
    (0x55, 0xa8, 0x68),
    (0xc4, 0x4e, 0x52),
    (0x81, 0x72, 0xb3),
    (0x93, 0x78, 0x60),
    (0xda, 0x8b, 0xc3),
    (0x8c, 0x8c, 0x8c),
    (0xcc, 0xb9, 0x74),
    (0x64, 0xb5, 0xcd),
];

impl Palette {
    pub const fn tab10() -> Self {
        Self { name: "tab10", colors: TAB10 }
    }

    pub const fn deep() -> Self {
        Self { name: "deep", colors: DEEP }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `index`-th group; wraps around after the last entry.
    pub fn get(&self, index: usize) -> skia::Color {
        let (r, g, b) = self.colors[index % self.colors.len()];
        skia::Color::from_rgb(r, g, b)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tab10()
    }
}

/// Find a palette by name, falling back to `tab10`.
pub fn find(name: &str) -> Palette {
    [Palette::tab10(), Palette::deep()]
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
