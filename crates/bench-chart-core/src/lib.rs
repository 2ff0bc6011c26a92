// File: crates/bench-chart-core/src/lib.rs
// Summary: Core library entry point; exports the load -> group -> render -> persist pipeline.

pub mod error;
pub mod table;
pub mod series;
pub mod label;
pub mod axis;
pub mod grid;
pub mod types;
pub mod theme;
pub mod text;
pub mod chart;
pub mod output;
pub mod renderer;
pub mod batch;

pub use error::{ChartError, ParseError, Result};
pub use table::{load_table, save_table, write_table, BenchmarkTable, TableRow};
pub use series::{group_by_series, Series, SeriesGroup};
pub use label::{extract_label, FirstInteger, LabelStrategy, LastInteger, PatternLabel};
pub use axis::Axis;
pub use theme::Theme;
pub use text::TextShaper;
pub use chart::{Chart, ChartImage, RenderOptions};
pub use output::{persist, MissingLabel, OutputNaming};
pub use renderer::{BenchmarkChartRenderer, ChartLabels};
pub use batch::{batch_input_path, BatchOptions, BatchOutcome, BatchReport};
