// File: crates/chart-core/src/series.rs
// Summary: Series / slice styling: display name and color, with the default naming scheme.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::color::Color;
use crate::legend::LegendEntry;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    pub name: String,
    pub color: Color,
}

impl SeriesStyle {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self { name: name.into(), color }
    }

    /// `S1`, `S2`, ... in green, the default when a chart is given no names or colors.
    pub fn numbered(index: usize) -> Self {
        Self { name: format!("S{}", index + 1), color: Rgb565::GREEN }
    }

    pub fn legend_entry(&self) -> LegendEntry<'_> {
        LegendEntry { name: &self.name, color: self.color }
    }
}

/// `count` styles from optional names and colors; missing entries fall back to
/// [`SeriesStyle::numbered`] piecewise.
pub fn styles(count: usize, names: &[&str], colors: &[Color]) -> Vec<SeriesStyle> {
    (0..count)
        .map(|i| {
            let fallback = SeriesStyle::numbered(i);
            SeriesStyle {
                name: names.get(i).map_or(fallback.name, |n| n.to_string()),
                color: colors.get(i).copied().unwrap_or(fallback.color),
            }
        })
        .collect()
}
