// File: crates/bench-chart-core/src/batch.rs
// Summary: Batch mode; repeats the single-file pipeline over `<index>_<base>` inputs.
// Notes:
// - A failing index is recorded in the report and the remaining indices still run.

use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

use tracing::{error, info, info_span, warn};

use crate::error::Result;
use crate::renderer::BenchmarkChartRenderer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub base_name: String,
    pub indices: Range<usize>,
    pub output_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            base_name: "benchmark_results.csv".to_string(),
            // one file per thread count: 1, 2, 4, ... 128
            indices: 0..8,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Input path for batch `index`: `<dir>/<index>_<base_name>`.
pub fn batch_input_path(dir: impl AsRef<Path>, index: usize, base_name: &str) -> PathBuf {
    dir.as_ref().join(format!("{index}_{base_name}"))
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub index: usize,
    pub input: PathBuf,
    pub result: Result<PathBuf>,
}

/// Per-index results in index order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool { self.outcomes.iter().all(|o| o.result.is_ok()) }

    pub fn outputs(&self) -> Vec<&Path> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok()).map(PathBuf::as_path).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn succeeded(&self) -> usize { self.outcomes.len() - self.failures().count() }
}

impl BenchmarkChartRenderer {
    pub fn run_batch(&self, opts: &BatchOptions) -> BatchReport {
        let mut report = BatchReport::default();
        let mut written: HashMap<PathBuf, usize> = HashMap::new();

        for index in opts.indices.clone() {
            let span = info_span!("batch", index);
            let _enter = span.enter();

            let input = batch_input_path(&opts.input_dir, index, &opts.base_name);
            let result = self.run(&input, &opts.output_dir);
            match &result {
                Ok(out) => {
                    if let Some(prev) = written.insert(out.clone(), index) {
                        warn!(path = %out.display(), previous = prev, "output replaces an earlier batch chart");
                    }
                }
                Err(e) => error!(input = %input.display(), error = %e, "batch input failed; continuing"),
            }
            report.outcomes.push(BatchOutcome { index, input, result });
        }

        info!(
            total = report.outcomes.len(),
            succeeded = report.succeeded(),
            "batch finished"
        );
        report
    }
}
