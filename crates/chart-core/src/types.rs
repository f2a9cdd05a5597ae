// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (capacities, layout reservations, insets).

/// Most line-graph series a chart will accept.
pub const MAX_SERIES: usize = 5;
/// Widest plot area, in pixel columns, a line graph will accept.
pub const MAX_COLUMNS: u32 = 500;
/// Most slices/bars a pie or bar chart will accept.
pub const MAX_SLICES: usize = 10;

/// Height reserved above the plot for the title, in pixels.
pub const TITLE_HEIGHT: u32 = 20;
/// Width reserved left of the plot for tick labels, in pixels.
pub const AXIS_MARGIN: u32 = 20;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}
