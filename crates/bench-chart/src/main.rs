// File: crates/bench-chart/src/main.rs
// Summary: CLI that renders benchmark CSVs to PNG charts, either one file or an indexed batch.
// Usage:
//   bench-chart [input.csv] [output.png]
//   bench-chart batch [base_name] [count] [output_dir]

use std::path::PathBuf;

use anyhow::{Context, Result};
use bench_chart_core::{BatchOptions, BatchReport, BenchmarkChartRenderer, ChartLabels};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "benchmark_results.csv";
const DEFAULT_OUTPUT: &str = "stats.png";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("batch") => run_batch(&args[1..]),
        _ => run_single(&args),
    }
}

fn run_single(args: &[String]) -> Result<()> {
    let input = PathBuf::from(args.first().map(String::as_str).unwrap_or(DEFAULT_INPUT));
    let output = PathBuf::from(args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUTPUT));
    info!(input = %input.display(), "using input file");

    let renderer = BenchmarkChartRenderer::new(ChartLabels::operations());
    renderer
        .run_to(&input, &output)
        .with_context(|| format!("failed to chart '{}'", input.display()))?;
    info!(output = %output.display(), "chart ready");
    Ok(())
}

fn run_batch(args: &[String]) -> Result<()> {
    let opts = parse_batch_args(args)?;
    let renderer = BenchmarkChartRenderer::per_thread_count(ChartLabels::bodies());
    let report = renderer.run_batch(&opts);

    for out in report.outputs() {
        info!(output = %out.display(), "chart ready");
    }
    check_report(&report)
}

/// `[base_name] [count] [output_dir]`; missing arguments keep the defaults.
fn parse_batch_args(args: &[String]) -> Result<BatchOptions> {
    let mut opts = BatchOptions::default();
    if let Some(base) = args.first() {
        opts.base_name = base.clone();
    }
    if let Some(count) = args.get(1) {
        let n: usize = count
            .parse()
            .with_context(|| format!("batch count must be a non-negative integer, got '{count}'"))?;
        opts.indices = 0..n;
    }
    if let Some(dir) = args.get(2) {
        opts.output_dir = PathBuf::from(dir);
    }
    Ok(opts)
}

/// Any failed index makes the whole run fail.
fn check_report(report: &BatchReport) -> Result<()> {
    let failed: Vec<_> = report.failures().collect();
    if failed.is_empty() {
        return Ok(());
    }
    for f in &failed {
        if let Err(e) = &f.result {
            warn!(index = f.index, input = %f.input.display(), "{e}");
        }
    }
    anyhow::bail!("{} of {} batch inputs failed", failed.len(), report.outcomes.len())
}
