// File: crates/bench-chart-core/src/output.rs
// Summary: Atomic replacement of output files and deterministic chart file naming.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::chart::ChartImage;
use crate::error::{ChartError, Result};

/// Default name used when charts are not named per label.
pub const DEFAULT_OUTPUT: &str = "stats.png";

/// Write `image` to `path`. The bytes land in a temporary sibling first and are
/// renamed over `path`, so readers see either the old file or the new one.
pub fn persist(image: &ChartImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, image.as_bytes())?;
    info!(path = %path.display(), bytes = image.as_bytes().len(), "wrote chart");
    Ok(())
}

pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".bench-chart-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| ChartError::Io(e.error))?;
    Ok(())
}

/// What to do when no label can be extracted for a per-label file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissingLabel {
    /// Substitute this text for the number and log a warning.
    Sentinel(String),
    /// Fail that input with [`ChartError::MissingLabel`].
    Fail,
}

impl Default for MissingLabel {
    fn default() -> Self { Self::Sentinel("unknown".to_string()) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputNaming {
    /// Always the same file name.
    Fixed(String),
    /// `<prefix>_<label>.png`.
    PerLabel { prefix: String, missing: MissingLabel },
}

impl Default for OutputNaming {
    fn default() -> Self { Self::Fixed(DEFAULT_OUTPUT.to_string()) }
}

impl OutputNaming {
    pub fn per_label() -> Self {
        Self::PerLabel { prefix: "stats".to_string(), missing: MissingLabel::default() }
    }

    /// File name for a chart whose first series is `series_name` with extracted `label`.
    pub fn file_name(&self, series_name: &str, label: Option<u64>) -> Result<String> {
        match self {
            Self::Fixed(name) => Ok(name.clone()),
            Self::PerLabel { prefix, missing } => match (label, missing) {
                (Some(n), _) => Ok(format!("{prefix}_{n}.png")),
                (None, MissingLabel::Sentinel(s)) => {
                    warn!(series = %series_name, sentinel = %s, "no label in series name; using sentinel");
                    Ok(format!("{prefix}_{s}.png"))
                }
                (None, MissingLabel::Fail) => {
                    Err(ChartError::MissingLabel { series: series_name.to_string() })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_label() {
        let n = OutputNaming::default();
        assert_eq!(n.file_name("Threads: 4", Some(4)).unwrap(), "stats.png");
    }

    #[test]
    fn per_label_names() {
        let n = OutputNaming::per_label();
        assert_eq!(n.file_name("Threads: 16", Some(16)).unwrap(), "stats_16.png");
        assert_eq!(n.file_name("Baseline", None).unwrap(), "stats_unknown.png");
    }

    #[test]
    fn missing_label_can_fail() {
        let n = OutputNaming::PerLabel { prefix: "stats".into(), missing: MissingLabel::Fail };
        let err = n.file_name("Baseline", None).unwrap_err();
        assert!(matches!(err, ChartError::MissingLabel { ref series } if series == "Baseline"));
    }
}
