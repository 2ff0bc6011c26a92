// File: crates/bench-chart-core/src/label.rs
// Summary: Pluggable strategies that pull an integer label (thread count) out of a series name.

use regex::Regex;

/// Extracts the integer used to name and title a chart from a series name.
pub trait LabelStrategy {
    fn id(&self) -> &'static str;
    fn extract(&self, series_name: &str) -> Option<u64>;
}

/// First contiguous run of ASCII digits, e.g. `"Threads_4"` -> 4.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstInteger;

impl LabelStrategy for FirstInteger {
    fn id(&self) -> &'static str { "first_integer" }

    fn extract(&self, series_name: &str) -> Option<u64> {
        digit_runs(series_name).next().and_then(|d| d.parse().ok())
    }
}

/// Last contiguous run of ASCII digits, for names like `"v2 Threads: 16"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastInteger;

impl LabelStrategy for LastInteger {
    fn id(&self) -> &'static str { "last_integer" }

    fn extract(&self, series_name: &str) -> Option<u64> {
        digit_runs(series_name).last().and_then(|d| d.parse().ok())
    }
}

/// Regex with exactly one capture group holding the digits.
#[derive(Clone, Debug)]
pub struct PatternLabel {
    re: Regex,
}

impl PatternLabel {
    /// Fails if `pattern` is invalid or does not have exactly one capture group.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let re = Regex::new(pattern)?;
        // slot 0 is the implicit whole-match group
        let groups = re.captures_len() - 1;
        if groups != 1 {
            return Err(regex::Error::Syntax(format!(
                "expected 1 capture group, found {groups}"
            )));
        }
        Ok(Self { re })
    }
}

impl LabelStrategy for PatternLabel {
    fn id(&self) -> &'static str { "pattern" }

    fn extract(&self, series_name: &str) -> Option<u64> {
        self.re
            .captures(series_name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// `FirstInteger` applied to `series_name`.
pub fn extract_label(series_name: &str) -> Option<u64> {
    FirstInteger.extract(series_name)
}

fn digit_runs(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_digit()).filter(|run| !run.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_integer() {
        assert_eq!(extract_label("Threads_4"), Some(4));
        assert_eq!(extract_label("Baseline"), None);
        assert_eq!(extract_label("MultiThreaded (Atomic - Static) Threads: 128"), Some(128));
        assert_eq!(extract_label("v2 Threads: 16"), Some(2));
        assert_eq!(extract_label(""), None);
    }

    #[test]
    fn last_integer() {
        assert_eq!(LastInteger.extract("v2 Threads: 16"), Some(16));
        assert_eq!(LastInteger.extract("none here"), None);
    }

    #[test]
    fn overflowing_run_is_none() {
        assert_eq!(extract_label("T99999999999999999999999"), None);
    }

    #[test]
    fn pattern_label() {
        let p = PatternLabel::new(r"Threads:\s*(\d+)").unwrap();
        assert_eq!(p.extract("v2 Threads: 16"), Some(16));
        assert_eq!(p.extract("Sequential"), None);
        assert!(PatternLabel::new(r"\d+").is_err());
        assert!(PatternLabel::new(r"(\d+)-(\d+)").is_err());
    }
}
