// File: crates/bench-chart-core/src/renderer.rs
// Summary: BenchmarkChartRenderer; wires load -> group -> render -> persist for one input file.

use std::path::{Path, PathBuf};

use crate::chart::{Chart, ChartImage, RenderOptions};
use crate::error::Result;
use crate::label::{FirstInteger, LabelStrategy};
use crate::output::{self, OutputNaming};
use crate::series::{self, SeriesGroup};
use crate::table::{self, BenchmarkTable};

/// Axis labels and title for one chart variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartLabels {
    pub x: String,
    pub y: String,
    pub title: String,
}

impl ChartLabels {
    pub fn new(x: impl Into<String>, y: impl Into<String>, title: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into(), title: title.into() }
    }

    /// Timings over an operation count.
    pub fn operations() -> Self {
        Self::new("Number of Operations", "Time (seconds)", "Performance Comparison of Threading Methods")
    }

    /// Force-calculation timings over a body count.
    pub fn bodies() -> Self {
        Self::new("Number of Bodies", "Time (seconds)", "N-Body Force Calculation Scaling")
    }
}

impl Default for ChartLabels {
    fn default() -> Self { Self::operations() }
}

pub struct BenchmarkChartRenderer {
    pub options: RenderOptions,
    pub labels: ChartLabels,
    pub naming: OutputNaming,
    /// Append `(Threads: N)` to the title when a label is found.
    pub label_in_title: bool,
    strategy: Box<dyn LabelStrategy>,
}

impl Default for BenchmarkChartRenderer {
    fn default() -> Self { Self::new(ChartLabels::operations()) }
}

impl BenchmarkChartRenderer {
    pub fn new(labels: ChartLabels) -> Self {
        Self {
            options: RenderOptions::default(),
            labels,
            naming: OutputNaming::default(),
            label_in_title: false,
            strategy: Box::new(FirstInteger),
        }
    }

    /// Per-thread-count charts: `stats_<N>.png`, label in the title.
    pub fn per_thread_count(labels: ChartLabels) -> Self {
        let mut r = Self::new(labels);
        r.naming = OutputNaming::per_label();
        r.label_in_title = true;
        r
    }

    pub fn with_strategy(mut self, strategy: impl LabelStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strategy_id(&self) -> &'static str { self.strategy.id() }

    pub fn load_table(&self, path: impl AsRef<Path>) -> Result<BenchmarkTable> {
        table::load_table(path)
    }

    pub fn group_by_series(&self, table: &BenchmarkTable) -> SeriesGroup {
        series::group_by_series(table)
    }

    pub fn extract_label(&self, series_name: &str) -> Option<u64> {
        self.strategy.extract(series_name)
    }

    pub fn render(&self, group: &SeriesGroup, x_label: &str, y_label: &str, title: &str) -> Result<ChartImage> {
        Chart::from_group(group, x_label, y_label, title).render(&self.options)
    }

    pub fn persist(&self, image: &ChartImage, path: impl AsRef<Path>) -> Result<()> {
        output::persist(image, path)
    }

    /// Full pipeline for `input`; the file name comes from `naming`. Returns the written path.
    pub fn run(&self, input: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let group = self.group_by_series(&self.load_table(input)?);
        let first = group.first().map(|s| s.name.as_str()).unwrap_or_default();
        let label = self.extract_label(first);
        let out = output_dir.as_ref().join(self.naming.file_name(first, label)?);
        self.render_group(&group, label, &out)?;
        Ok(out)
    }

    /// Full pipeline for `input` written to exactly `output`.
    pub fn run_to(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let group = self.group_by_series(&self.load_table(input)?);
        let label = group.first().and_then(|s| self.extract_label(&s.name));
        self.render_group(&group, label, output.as_ref())
    }

    fn render_group(&self, group: &SeriesGroup, label: Option<u64>, out: &Path) -> Result<()> {
        let title = self.title_for(label);
        let image = self.render(group, &self.labels.x, &self.labels.y, &title)?;
        self.persist(&image, out)
    }

    pub fn title_for(&self, label: Option<u64>) -> String {
        match label {
            Some(n) if self.label_in_title => format!("{} (Threads: {n})", self.labels.title),
            _ => self.labels.title.clone(),
        }
    }
}
