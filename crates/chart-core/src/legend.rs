// File: crates/chart-core/src/legend.rs
// Summary: Legend placement variants, the space each reserves, and swatch + label drawing.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::Color;
use crate::device::{RasterDevice, TextAnchor};
use crate::types::Insets;

const BAND: u32 = 15;
const SWATCH: u32 = 10;
const PADDING: i32 = 4;
const LABEL_ALLOWANCE: i32 = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

/// One legend row: swatch color and label.
#[derive(Clone, Copy, Debug)]
pub struct LegendEntry<'a> {
    pub name: &'a str,
    pub color: Color,
}

impl LegendPosition {
    /// Space the legend needs: band height for top/bottom, widest label for left/right.
    pub fn reserve<'a, D, I>(self, dev: &D, names: I) -> u32
    where
        D: RasterDevice + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            Self::Top | Self::Bottom => BAND,
            Self::Left | Self::Right => names
                .into_iter()
                .map(|n| (dev.text_width(n) + LABEL_ALLOWANCE).max(0) as u32)
                .max()
                .unwrap_or(0),
        }
    }

    /// Geometry delta for a legend of `size` pixels.
    pub fn layout(self, size: u32) -> Insets {
        match self {
            Self::Top => Insets::new(0, 0, size, 0),
            Self::Bottom => Insets::new(0, 0, 0, size),
            Self::Left => Insets::new(size, 0, 0, 0),
            Self::Right => Insets::new(0, size, 0, 0),
        }
    }

    /// Draw swatches and labels around `plot`, inside `bounds`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw<D>(
        self,
        dev: &mut D,
        bounds: Rectangle,
        plot: Rectangle,
        title_height: u32,
        entries: &[LegendEntry<'_>],
        text: Color,
        background: Color,
    ) where
        D: RasterDevice + ?Sized,
    {
        if entries.is_empty() {
            return;
        }
        let swatch = Size::new(SWATCH, SWATCH);
        match self {
            Self::Top | Self::Bottom => {
                let mut lx = plot.top_left.x;
                let ly = if self == Self::Top {
                    bounds.top_left.y + title_height as i32
                } else {
                    plot.top_left.y + plot.size.height as i32 + 2
                };
                for e in entries {
                    let label_x = lx + SWATCH as i32 + PADDING;
                    dev.fill_rect(Rectangle::new(Point::new(lx, ly), swatch), e.color);
                    dev.draw_text(e.name, Point::new(label_x, ly), TextAnchor::TopLeft, text, background);
                    lx = label_x + dev.text_width(e.name) + PADDING;
                }
            }
            Self::Left | Self::Right => {
                let lx = if self == Self::Left {
                    bounds.top_left.x + 2
                } else {
                    plot.top_left.x + plot.size.width as i32 + 2
                };
                let pitch = plot.size.height as i32 / entries.len() as i32;
                for (i, e) in entries.iter().enumerate() {
                    let ly = plot.top_left.y + i as i32 * pitch;
                    dev.fill_rect(Rectangle::new(Point::new(lx, ly), swatch), e.color);
                    dev.draw_text(
                        e.name,
                        Point::new(lx + SWATCH as i32 + 2, ly),
                        TextAnchor::TopLeft,
                        text,
                        background,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingDevice};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

    #[test]
    fn side_legends_reserve_widest_label() {
        let dev = RecordingDevice::new();
        let names = ["S1", "Temperature"];
        assert_eq!(LegendPosition::Right.reserve(&dev, names), 11 * 6 + 20);
        assert_eq!(LegendPosition::Left.reserve(&dev, names), 86);
        assert_eq!(LegendPosition::Top.reserve(&dev, names), 15);
        assert_eq!(LegendPosition::Bottom.reserve(&dev, std::iter::empty::<&str>()), 15);
        assert_eq!(LegendPosition::Left.reserve(&dev, std::iter::empty::<&str>()), 0);
    }

    #[test]
    fn each_variant_insets_one_side() {
        assert_eq!(LegendPosition::Top.layout(15), Insets::new(0, 0, 15, 0));
        assert_eq!(LegendPosition::Bottom.layout(15), Insets::new(0, 0, 0, 15));
        assert_eq!(LegendPosition::Left.layout(40), Insets::new(40, 0, 0, 0));
        assert_eq!(LegendPosition::Right.layout(40), Insets::new(0, 40, 0, 0));
    }

    #[test]
    fn top_legend_flows_horizontally() {
        let mut dev = RecordingDevice::new();
        let bounds = Rectangle::new(Point::zero(), Size::new(160, 100));
        let plot = Rectangle::new(Point::new(20, 35), Size::new(140, 65));
        let entries = [
            LegendEntry { name: "ab", color: Rgb565::RED },
            LegendEntry { name: "c", color: Rgb565::GREEN },
        ];
        LegendPosition::Top.draw(&mut dev, bounds, plot, 20, &entries, Rgb565::WHITE, Rgb565::BLACK);
        let swatches: Vec<Point> = dev
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::FillRect { rect, .. } => Some(rect.top_left),
                _ => None,
            })
            .collect();
        // second swatch starts after swatch + padding + "ab" + padding
        assert_eq!(swatches, vec![Point::new(20, 20), Point::new(20 + 10 + 4 + 12 + 4, 20)]);
    }
}
