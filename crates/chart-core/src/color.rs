// File: crates/chart-core/src/color.rs
// Summary: RGB565 color blending with a visibility boost for thin anti-aliased strokes.

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::{IntoStorage, Rgb565, RgbColor};

/// Packed 5/6/5 color used by every drawing routine.
pub type Color = Rgb565;

/// Tone curve applied to coverage before blending.
///
/// Small fractional coverages are exaggerated (`alpha^exponent` with an
/// exponent below 1) so one-pixel strokes stay visible on coarse,
/// low-contrast panels. The default exponent of `0.5` is a square root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityBoost {
    pub exponent: f32,
}

impl VisibilityBoost {
    /// Square-root boost.
    pub const SQRT: Self = Self { exponent: 0.5 };
    /// Physically linear coverage, no boost.
    pub const LINEAR: Self = Self { exponent: 1.0 };

    pub const fn new(exponent: f32) -> Self {
        Self { exponent }
    }

    /// Map raw coverage to blend weight. Always returns a value in `[0, 1]`.
    ///
    /// An exponent that is NaN, infinite or not positive has no usable
    /// curve and falls back to linear coverage.
    pub fn boost(&self, alpha: f32) -> f32 {
        if alpha.is_nan() || alpha <= 0.0 {
            0.0
        } else if alpha >= 1.0 {
            1.0
        } else if self.exponent == 0.5 {
            alpha.sqrt()
        } else if !self.exponent.is_finite() || self.exponent <= 0.0 {
            alpha
        } else {
            alpha.powf(self.exponent).clamp(0.0, 1.0)
        }
    }

    /// Blend `fg` over `bg` with boosted coverage `alpha`.
    pub fn blend(&self, fg: Color, bg: Color, alpha: f32) -> Color {
        let w = self.boost(alpha);
        if w <= 0.0 {
            bg
        } else if w >= 1.0 {
            fg
        } else {
            mix_channels(fg, bg, w)
        }
    }
}

impl Default for VisibilityBoost {
    fn default() -> Self {
        Self::SQRT
    }
}

/// Blend with the default square-root boost.
#[inline]
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    VisibilityBoost::SQRT.blend(fg, bg, alpha)
}

/// Linear per-channel mix without the boost. `weight` is clamped to `[0, 1]`.
pub fn mix(fg: Color, bg: Color, weight: f32) -> Color {
    let w = if weight.is_nan() { 0.0 } else { weight.clamp(0.0, 1.0) };
    if w <= 0.0 {
        bg
    } else if w >= 1.0 {
        fg
    } else {
        mix_channels(fg, bg, w)
    }
}

fn mix_channels(fg: Color, bg: Color, w: f32) -> Color {
    let ch = |a: u8, b: u8| -> u8 { (a as f32 * w + b as f32 * (1.0 - w)).round() as u8 };
    Rgb565::new(ch(fg.r(), bg.r()), ch(fg.g(), bg.g()), ch(fg.b(), bg.b()))
}

/// Build a color from its packed 16-bit representation.
#[inline]
pub fn from_raw(raw: u16) -> Color {
    Rgb565::from(RawU16::new(raw))
}

/// Packed 16-bit representation of a color.
#[inline]
pub fn to_raw(color: Color) -> u16 {
    color.into_storage()
}

/// Expand a 5/6/5 color to 8-bit channels (bit replication).
pub fn to_rgb888(color: Color) -> (u8, u8, u8) {
    let r = color.r();
    let g = color.g();
    let b = color.b();
    ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
}

/// Quantize 8-bit channels to 5/6/5.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}
