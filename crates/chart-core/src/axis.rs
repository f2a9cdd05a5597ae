// File: crates/chart-core/src/axis.rs
// Summary: Y axis ticks and labels drawn left of the plot.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::Color;
use crate::device::{RasterDevice, TextAnchor};
use crate::geometry::PlotGeometry;
use crate::scale::{ValueRange, ValueScale};

const TICK_LEN: u32 = 3;
const MAX_TICKS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub range: ValueRange,
    pub step: f32,
}

impl Axis {
    pub fn new(range: ValueRange, step: f32) -> Self {
        Self { range, step }
    }

    /// Tick values `min, min + step, ...` up to and including `max`.
    /// A non-positive step yields just the two ends.
    pub fn ticks(&self) -> Vec<f32> {
        let ValueRange { min, max } = self.range;
        if self.step.is_nan() || self.step <= 0.0 {
            return vec![min, max];
        }
        let count = (((max - min) / self.step + 1e-4).floor() as usize).min(MAX_TICKS);
        (0..=count).map(|i| min + i as f32 * self.step).collect()
    }

    pub fn draw<D>(&self, dev: &mut D, plot: &PlotGeometry, text: Color, background: Color)
    where
        D: RasterDevice + ?Sized,
    {
        let scale = ValueScale::new(plot.bottom(), plot.top(), self.range);
        for v in self.ticks() {
            let py = scale.to_row(v);
            let mark = Rectangle::new(Point::new(plot.left() - TICK_LEN as i32, py), Size::new(TICK_LEN, 1));
            dev.fill_rect(mark, text);
            dev.draw_text(
                &format_tick(v),
                Point::new(plot.left() - TICK_LEN as i32 - 1, py),
                TextAnchor::MiddleRight,
                text,
                background,
            );
        }
    }
}

/// Whole numbers print without decimals, everything else with one.
pub fn format_tick(v: f32) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
