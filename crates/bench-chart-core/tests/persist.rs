// File: crates/bench-chart-core/tests/persist.rs
// Purpose: Output replacement leaves exactly one fresh file at the target path.

use std::path::PathBuf;

use bench_chart_core::{persist, ChartImage};

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/persist").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn entries(dir: &PathBuf) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn replaces_existing_file() {
    let dir = fresh_dir("replace");
    let target = dir.join("stats.png");
    std::fs::write(&target, b"old chart bytes").unwrap();

    let image = ChartImage::from_png(b"new chart bytes, longer than before".to_vec(), 1, 1);
    persist(&image, &target).expect("persist");

    assert_eq!(std::fs::read(&target).unwrap(), image.as_bytes());
    assert_eq!(entries(&dir), vec!["stats.png".to_string()]);
}

#[test]
fn missing_target_is_not_an_error() {
    let dir = fresh_dir("fresh");
    let target = dir.join("nested").join("stats_4.png");
    let image = ChartImage::from_png(vec![1, 2, 3], 1, 1);
    persist(&image, &target).expect("persist into new directory");
    assert_eq!(std::fs::read(&target).unwrap(), vec![1, 2, 3]);
}

#[test]
fn repeated_persist_keeps_single_file() {
    let dir = fresh_dir("repeat");
    let target = dir.join("stats.png");
    for i in 0..3u8 {
        persist(&ChartImage::from_png(vec![i; 8], 1, 1), &target).unwrap();
    }
    assert_eq!(std::fs::read(&target).unwrap(), vec![2u8; 8]);
    assert_eq!(entries(&dir).len(), 1);
}
