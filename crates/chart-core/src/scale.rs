// File: crates/chart-core/src/scale.rs
// Summary: Value range and the value -> pixel row transform (Y grows downward).

use crate::error::{ChartError, Result};

/// Closed value interval `[min, max]` with `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::EmptyValueRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamp into the range; NaN lands on `min`.
    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        if v.is_nan() { self.min } else { v.clamp(self.min, self.max) }
    }

    /// Position of `v` in the range as a fraction, clamped to `[0, 1]`.
    pub fn fraction(&self, v: f32) -> f32 {
        ((self.clamp(v) - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 100.0 }
    }
}

/// Affine map from `[min, max]` onto pixel rows `[bottom, top]`.
///
/// Only the forward direction exists; rows are never mapped back to values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub bottom_px: i32,
    pub top_px: i32,
    pub range: ValueRange,
}

impl ValueScale {
    pub fn new(bottom_px: i32, top_px: i32, range: ValueRange) -> Self {
        Self { bottom_px, top_px, range }
    }

    /// Nearest pixel row for `v`. Values outside the range extrapolate.
    #[inline]
    pub fn to_row(&self, v: f32) -> i32 {
        let t = (v - self.range.min) / self.range.span();
        self.bottom_px - (t * (self.bottom_px - self.top_px) as f32).round() as i32
    }
}
