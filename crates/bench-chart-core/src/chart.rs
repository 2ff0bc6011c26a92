// File: crates/bench-chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::grid::{format_tick, nice_ticks, range_step};
use crate::output::persist;
use crate::series::{Series, SeriesGroup};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TITLE_SIZE: f32 = 16.0;
const AXIS_LABEL_SIZE: f32 = 13.0;
const TICK_LABEL_SIZE: f32 = 11.0;
const LEGEND_SIZE: f32 = 12.0;
const LEGEND_ROW: f32 = 18.0;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_SWATCH: f32 = 24.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (titles, ticks, legend names) for pixel-stable output.
    pub draw_labels: bool,
    pub line_width: f32,
    pub marker_radius: f32,
    pub max_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            line_width: 1.5,
            marker_radius: 3.5,
            max_ticks: 8,
        }
    }
}

/// Encoded PNG produced by [`Chart::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartImage {
    png: Vec<u8>,
    width: i32,
    height: i32,
}

impl ChartImage {
    pub fn from_png(png: Vec<u8>, width: i32, height: i32) -> Self {
        Self { png, width, height }
    }
    pub fn as_bytes(&self) -> &[u8] { &self.png }
    pub fn into_bytes(self) -> Vec<u8> { self.png }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_markers: bool,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_markers: true,
            show_grid: true,
            show_legend: true,
        }
    }

    /// One line per series in group order, axes fitted with a 5% margin.
    pub fn from_group(group: &SeriesGroup, x_label: &str, y_label: &str, title: &str) -> Self {
        let mut chart = Self::new();
        chart.title = title.to_string();
        chart.x_axis.label = x_label.to_string();
        chart.y_axis.label = y_label.to_string();
        for s in group {
            chart.add_series(s.clone());
        }
        chart.autoscale_axes(0.05);
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the finite points of every series.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for &(px, py) in self.series.iter().flat_map(|s| s.data_xy.iter()) {
            if !px.is_finite() || !py.is_finite() { continue; }
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }
        self.x_axis.fit(x.0, x.1, margin);
        self.y_axis.fit(y.0, y.1, margin);
    }

    /// Render to an in-memory PNG using a CPU raster surface.
    pub fn render(&self, opts: &RenderOptions) -> Result<ChartImage> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| ChartError::render("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = PlotRect::new(opts, &self.x_axis, &self.y_axis);
        let text = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, opts.max_ticks);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, opts.max_ticks);

        if self.show_grid {
            draw_grid(canvas, &plot, &x_ticks, &y_ticks, theme);
        }
        draw_frame(canvas, &plot, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(plot.rect(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &plot, s, theme.series_color(i), opts, self.show_markers);
        }
        canvas.restore();

        if let Some(text) = &text {
            draw_tick_labels(canvas, text, &plot, &self.x_axis, &self.y_axis, &x_ticks, &y_ticks, opts);
            draw_titles(canvas, text, &plot, self, opts);
        }
        if self.show_legend && !self.series.is_empty() {
            draw_legend(canvas, text.as_ref(), &plot, &self.series, opts, self.show_markers);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::render("encode PNG failed"))?;
        Ok(ChartImage::from_png(data.as_bytes().to_vec(), opts.width, opts.height))
    }

    /// Render and atomically replace `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let image = self.render(opts)?;
        persist(&image, output_png_path)
    }
}

// ---- helpers ----------------------------------------------------------------

/// Plot area in pixels plus the data -> pixel transform.
struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
    x: Axis,
    y: Axis,
}

impl PlotRect {
    fn new(opts: &RenderOptions, x: &Axis, y: &Axis) -> Self {
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        let r = (opts.width as f32 - opts.insets.right as f32).max(l + 1.0);
        let b = (opts.height as f32 - opts.insets.bottom as f32).max(t + 1.0);
        Self { l, t, r, b, x: x.clone(), y: y.clone() }
    }

    fn rect(&self) -> skia::Rect { skia::Rect::from_ltrb(self.l, self.t, self.r, self.b) }

    #[inline]
    fn sx(&self, x: f64) -> f32 { self.l + self.x.fraction(x) as f32 * (self.r - self.l) }

    #[inline]
    fn sy(&self, y: f64) -> f32 { self.b - self.y.fraction(y) as f32 * (self.b - self.t) }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, plot: &PlotRect, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);
    for &x in x_ticks {
        let px = plot.sx(x);
        canvas.draw_line((px, plot.t), (px, plot.b), &paint);
    }
    for &y in y_ticks {
        let py = plot.sy(y);
        canvas.draw_line((plot.l, py), (plot.r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: &PlotRect, x_ticks: &[f64], y_ticks: &[f64], theme: &Theme) {
    let axis_paint = stroke_paint(theme.axis_line, 1.0);
    canvas.draw_rect(plot.rect(), &axis_paint);

    let tick_paint = stroke_paint(theme.tick, 1.0);
    for &x in x_ticks {
        let px = plot.sx(x);
        canvas.draw_line((px, plot.b), (px, plot.b + 4.0), &tick_paint);
    }
    for &y in y_ticks {
        let py = plot.sy(y);
        canvas.draw_line((plot.l - 4.0, py), (plot.l, py), &tick_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: &PlotRect,
    series: &Series,
    color: skia::Color,
    opts: &RenderOptions,
    markers: bool,
) {
    if series.data_xy.is_empty() { return; }

    // non-finite values break the line instead of poisoning the path
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in &series.data_xy {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (plot.sx(x), plot.sy(y));
        if pen_down { path.line_to(p); } else { path.move_to(p); }
        pen_down = true;
    }
    canvas.draw_path(&path, &stroke_paint(color, opts.line_width));

    if markers {
        let fill = fill_paint(color);
        for &(x, y) in series.data_xy.iter().filter(|p| p.0.is_finite() && p.1.is_finite()) {
            canvas.draw_circle((plot.sx(x), plot.sy(y)), opts.marker_radius, &fill);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    x_ticks: &[f64],
    y_ticks: &[f64],
    opts: &RenderOptions,
) {
    let color = opts.theme.tick;
    let x_step = range_step(x_axis.min, x_axis.max, opts.max_ticks);
    let y_step = range_step(y_axis.min, y_axis.max, opts.max_ticks);
    for &x in x_ticks {
        text.draw_centered(canvas, &format_tick(x, x_step), plot.sx(x), plot.b + 18.0, TICK_LABEL_SIZE, color);
    }
    for &y in y_ticks {
        text.draw_right(canvas, &format_tick(y, y_step), plot.l - 7.0, plot.sy(y) + TICK_LABEL_SIZE * 0.35, TICK_LABEL_SIZE, color);
    }
}

fn draw_titles(canvas: &skia::Canvas, text: &TextShaper, plot: &PlotRect, chart: &Chart, opts: &RenderOptions) {
    let theme = &opts.theme;
    let cx = (plot.l + plot.r) * 0.5;
    if !chart.title.is_empty() {
        text.draw_centered(canvas, &chart.title, cx, plot.t - 16.0, TITLE_SIZE, theme.title);
    }
    if !chart.x_axis.label.is_empty() {
        text.draw_centered(canvas, &chart.x_axis.label, cx, plot.b + 42.0, AXIS_LABEL_SIZE, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        let cy = (plot.t + plot.b) * 0.5;
        text.draw_vertical(canvas, &chart.y_axis.label, plot.l - 66.0, cy, AXIS_LABEL_SIZE, theme.axis_label);
    }
}

/// Legend box in the upper-left corner of the plot: swatch (+ marker) and name per series.
fn draw_legend(
    canvas: &skia::Canvas,
    text: Option<&TextShaper>,
    plot: &PlotRect,
    series: &[Series],
    opts: &RenderOptions,
    markers: bool,
) {
    let theme = &opts.theme;
    let text_w = text
        .map(|t| series.iter().map(|s| t.measure_width(&s.name, LEGEND_SIZE)).fold(0.0f32, f32::max))
        .unwrap_or(0.0);
    let w = LEGEND_PAD * 2.0 + LEGEND_SWATCH + if text_w > 0.0 { 6.0 + text_w } else { 0.0 };
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * series.len() as f32;
    let x0 = plot.l + 10.0;
    let y0 = plot.t + 10.0;

    let rect = skia::Rect::from_xywh(x0, y0, w, h);
    canvas.draw_rect(rect, &fill_paint(theme.legend_fill));
    canvas.draw_rect(rect, &stroke_paint(theme.legend_border, 1.0));

    for (i, s) in series.iter().enumerate() {
        let color = theme.series_color(i);
        let cy = y0 + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let sx0 = x0 + LEGEND_PAD;
        let sx1 = sx0 + LEGEND_SWATCH;
        canvas.draw_line((sx0, cy), (sx1, cy), &stroke_paint(color, opts.line_width));
        if markers {
            canvas.draw_circle(((sx0 + sx1) * 0.5, cy), opts.marker_radius, &fill_paint(color));
        }
        if let Some(t) = text {
            t.draw_left(canvas, &s.name, sx1 + 6.0, cy + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoscale_pads_range() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (10.0, 3.0)]));
        chart.autoscale_axes(0.05);
        assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
        assert!((chart.x_axis.max - 10.5).abs() < 1e-9);
        assert!((chart.y_axis.min - 0.9).abs() < 1e-9);
        assert!((chart.y_axis.max - 3.1).abs() < 1e-9);
    }

    #[test]
    fn autoscale_ignores_non_finite() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data("a", vec![(0.0, f64::NAN), (1.0, 2.0), (2.0, 4.0)]));
        chart.autoscale_axes(0.0);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1.0, 2.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (2.0, 4.0));
    }

    #[test]
    fn empty_chart_gets_unit_axes() {
        let mut chart = Chart::new();
        chart.autoscale_axes(0.05);
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    }

    #[test]
    fn extreme_values_map_inside_plot() {
        let mut chart = Chart::new();
        chart.add_series(Series::with_data("a", vec![(0.0, -1e308), (1.0, 1e308)]));
        chart.autoscale_axes(0.05);
        assert!(chart.y_axis.min.is_finite() && chart.y_axis.max.is_finite());

        let opts = RenderOptions::default();
        let plot = PlotRect::new(&opts, &chart.x_axis, &chart.y_axis);
        for y in [-1e308, 0.0, 1e308] {
            let py = plot.sy(y);
            assert!(py.is_finite() && py >= plot.t && py <= plot.b, "y={y} -> {py}");
        }
        assert!(chart.render(&RenderOptions { draw_labels: false, ..opts }).is_ok());
    }
}
