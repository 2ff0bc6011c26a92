// File: crates/bench-chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels (10 in at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels + rotated axis label, title, x ticks + label
        Self::new(88, 24, 48, 64)
    }
}
