// File: crates/bench-chart-core/tests/batch.rs
// Purpose: Batch mode produces one independent chart per index and survives failing inputs.

use std::path::PathBuf;

use bench_chart_core::{
    batch_input_path, BatchOptions, BenchmarkChartRenderer, ChartError, ChartLabels, MissingLabel, OutputNaming,
};

const THREADS: [u32; 8] = [1, 2, 4, 8, 16, 32, 64, 128];

fn setup(name: &str) -> (PathBuf, PathBuf) {
    let root = PathBuf::from("target/test_out/batch").join(name);
    let _ = std::fs::remove_dir_all(&root);
    let input = root.join("in");
    let output = root.join("out");
    std::fs::create_dir_all(&input).unwrap();
    (input, output)
}

fn harness_csv(threads: u32) -> String {
    let mut s = String::from("Method,100,200,500\n");
    for method in ["Sequential", "MultiThreaded (Reduction - Dynamic)", "MultiThreaded (Atomic - Static)"] {
        let scale = 1.0 / threads as f64;
        s.push_str(&format!("{method} Threads: {threads},{},{},{}\n", 0.01 * scale, 0.04 * scale, 0.25 * scale));
    }
    s
}

fn renderer() -> BenchmarkChartRenderer {
    let mut r = BenchmarkChartRenderer::per_thread_count(ChartLabels::bodies());
    r.options.width = 320;
    r.options.height = 200;
    r.options.draw_labels = false;
    r
}

#[test]
fn eight_inputs_eight_distinct_charts() {
    let (input, output) = setup("eight");
    for (i, t) in THREADS.iter().enumerate() {
        std::fs::write(batch_input_path(&input, i, "benchmark_results.csv"), harness_csv(*t)).unwrap();
    }

    let opts = BatchOptions { input_dir: input, output_dir: output.clone(), ..BatchOptions::default() };
    let report = renderer().run_batch(&opts);

    assert!(report.is_success(), "failures: {:?}", report.failures().collect::<Vec<_>>());
    assert_eq!(report.outcomes.len(), 8);
    let mut outputs: Vec<PathBuf> = report.outputs().into_iter().map(PathBuf::from).collect();
    outputs.sort();
    outputs.dedup();
    assert_eq!(outputs.len(), 8);
    for t in THREADS {
        let path = output.join(format!("stats_{t}.png"));
        let bytes = std::fs::read(&path).expect("chart written");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} should be a PNG", path.display());
    }
}

#[test]
fn failing_index_does_not_abort_batch() {
    let (input, output) = setup("partial");
    std::fs::write(batch_input_path(&input, 0, "results.csv"), harness_csv(1)).unwrap();
    // index 1 is missing, index 2 is malformed
    std::fs::write(batch_input_path(&input, 2, "results.csv"), "Method,1,2\nSeq,0.1\n").unwrap();
    std::fs::write(batch_input_path(&input, 3, "results.csv"), harness_csv(8)).unwrap();

    let opts = BatchOptions {
        input_dir: input,
        base_name: "results.csv".into(),
        indices: 0..4,
        output_dir: output.clone(),
    };
    let report = renderer().run_batch(&opts);

    assert!(!report.is_success());
    assert_eq!(report.succeeded(), 2);
    assert!(matches!(report.outcomes[1].result, Err(ChartError::NotFound(_))));
    assert!(matches!(report.outcomes[2].result, Err(ChartError::Parse(_))));
    assert!(output.join("stats_1.png").exists());
    assert!(output.join("stats_8.png").exists());
}

#[test]
fn unlabeled_series_use_sentinel_or_fail() {
    let (input, output) = setup("unlabeled");
    std::fs::write(batch_input_path(&input, 0, "r.csv"), "Method,1,2\nBaseline,0.1,0.2\n").unwrap();
    let opts = BatchOptions { input_dir: input, base_name: "r.csv".into(), indices: 0..1, output_dir: output.clone() };

    let report = renderer().run_batch(&opts);
    assert!(report.is_success());
    assert!(output.join("stats_unknown.png").exists());

    let mut strict = renderer();
    strict.naming = OutputNaming::PerLabel { prefix: "stats".into(), missing: MissingLabel::Fail };
    let report = strict.run_batch(&opts);
    assert!(matches!(report.outcomes[0].result, Err(ChartError::MissingLabel { .. })));
}

#[test]
fn colliding_outputs_keep_the_later_chart() {
    let (input, output) = setup("collision");
    let first = batch_input_path(&input, 0, "r.csv");
    let second = batch_input_path(&input, 1, "r.csv");
    std::fs::write(&first, harness_csv(4)).unwrap();
    // same thread count, different timings
    std::fs::write(&second, "Method,100,200,500\nSequential Threads: 4,0.5,0.1,0.3\n").unwrap();

    let opts = BatchOptions { input_dir: input, base_name: "r.csv".into(), indices: 0..2, output_dir: output.clone() };
    let report = renderer().run_batch(&opts);

    assert!(report.is_success());
    let expected = output.join("stats_4.png");
    for outcome in &report.outcomes {
        assert_eq!(outcome.result.as_ref().unwrap(), &expected);
    }
    let written: Vec<_> = std::fs::read_dir(&output).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(written, vec![std::ffi::OsString::from("stats_4.png")]);

    let pixels = |path: &std::path::Path| image::open(path).unwrap().to_rgba8().into_raw();
    let reference = output.parent().unwrap().join("reference");
    renderer().run_to(&first, reference.join("index0.png")).unwrap();
    renderer().run_to(&second, reference.join("index1.png")).unwrap();

    let kept = pixels(&expected);
    assert_eq!(kept, pixels(&reference.join("index1.png")));
    assert_ne!(kept, pixels(&reference.join("index0.png")));
}
