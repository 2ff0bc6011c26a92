// File: crates/bench-chart-core/src/error.rs
// Summary: Error types for loading, rendering, and persisting benchmark charts.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ChartError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("no label found in series name '{series}'")]
    MissingLabel { series: String },
    #[error("render: {0}")]
    Render(String),
}

impl ChartError {
    pub fn render(msg: impl Into<String>) -> Self { Self::Render(msg.into()) }
}

/// Malformed benchmark table content. Line numbers and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("missing header row")]
    MissingHeader,
    #[error("line {line}, column {column}: '{value}' is not a valid {expected}")]
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
        expected: &'static str,
    },
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount { line: u64, expected: usize, found: usize },
    #[error("line {line}, column {column}: cell is not valid UTF-8")]
    InvalidUtf8 { line: u64, column: usize },
    /// Row added in code (`BenchmarkTable::push_row`); `row` is its 0-based index, not a file line.
    #[error("row {row}: expected {expected} values, found {found}")]
    RowWidth { row: usize, expected: usize, found: usize },
}
