// File: crates/bench-chart-core/src/axis.rs
// Summary: Axis model with label and data range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self { Self::new("Number of Operations", 0.0, 1.0) }

    pub fn default_y() -> Self { Self::new("Time (seconds)", 0.0, 1.0) }

    /// Width of the range, kept finite even when `max - min` overflows.
    pub fn span(&self) -> f64 { (self.max - self.min).clamp(1e-9, f64::MAX) }

    /// Position of `v` along the range, 0 at `min` and 1 at `max`.
    /// Halved operands keep the result finite for any finite range.
    pub fn fraction(&self, v: f64) -> f64 {
        let half_span = (self.max * 0.5 - self.min * 0.5).max(5e-10);
        (v * 0.5 - self.min * 0.5) / half_span
    }

    /// Fit the range to `[lo, hi]` padded by `margin` (fraction of the span).
    /// Empty or non-finite input yields `[0, 1]`; a zero span widens to one unit.
    /// When padding would overflow, the range stays at `[lo, hi]`.
    pub fn fit(&mut self, lo: f64, hi: f64, margin: f64) {
        if !lo.is_finite() || !hi.is_finite() {
            self.min = 0.0;
            self.max = 1.0;
            return;
        }
        let (lo, hi) = if (hi - lo).abs() < 1e-12 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let pad = (hi - lo) * margin.max(0.0);
        let (min, max) = (lo - pad, hi + pad);
        if min.is_finite() && max.is_finite() {
            self.min = min;
            self.max = max;
        } else {
            self.min = lo;
            self.max = hi;
        }
    }
}
