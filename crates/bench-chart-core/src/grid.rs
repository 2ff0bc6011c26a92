// File: crates/bench-chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" tick steps) plus tick label formatting.

/// Step of the form {1, 2, 2.5, 5} x 10^k giving at most `max_ticks` ticks over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    let max_ticks = max_ticks.max(2) as f64;
    let raw = (span.abs() / (max_ticks - 1.0)).max(1e-12);
    let exp = raw.log10().floor() as i32;
    let mag = if exp < 0 { 1.0 / 10f64.powi(-exp) } else { 10f64.powi(exp) };
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// `nice_step` for the range `[min, max]`; a span that overflows f64 is stepped in halves.
pub fn range_step(min: f64, max: f64, max_ticks: usize) -> f64 {
    let span = max - min;
    if span.is_finite() {
        nice_step(span, max_ticks)
    } else {
        nice_step(max * 0.5 - min * 0.5, max_ticks) * 2.0
    }
}

/// Tick positions on multiples of `range_step` that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = range_step(min, max, max_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize + 1 };
    let v = if value.abs() < step * 1e-6 { 0.0 } else { value };
    let s = format!("{v:.decimals$}");
    if decimals > 0 {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
