// File: crates/bench-chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and the per-series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    dark: bool,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 223, 223, 223),
            axis_line: skia::Color::from_argb(255, 30, 30, 30),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            dark: false,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_fill: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
            dark: true,
        }
    }

    /// Stroke color for the series at `index`; cycles through ten hues.
    pub fn series_color(&self, index: usize) -> skia::Color {
        let palette = if self.dark { dark_palette() } else { light_palette() };
        palette[index % palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

fn light_palette() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
        skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
        skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
        skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
        skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
        skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
        skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
        skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
        skia::Color::from_argb(255, 0xbc, 0xbd, 0x22),
        skia::Color::from_argb(255, 0x17, 0xbe, 0xcf),
    ]
}

fn dark_palette() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 64, 160, 255),
        skia::Color::from_argb(255, 255, 170, 60),
        skia::Color::from_argb(255, 40, 200, 120),
        skia::Color::from_argb(255, 220, 80, 80),
        skia::Color::from_argb(255, 180, 140, 255),
        skia::Color::from_argb(255, 200, 150, 110),
        skia::Color::from_argb(255, 255, 130, 210),
        skia::Color::from_argb(255, 190, 190, 190),
        skia::Color::from_argb(255, 230, 230, 80),
        skia::Color::from_argb(255, 60, 220, 235),
    ]
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
