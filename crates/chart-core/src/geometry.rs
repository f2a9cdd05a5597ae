// File: crates/chart-core/src/geometry.rs
// Summary: Plot rectangle computed once from chart bounds, title, axis margin and legend.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::error::{ChartError, Result};
use crate::types::Insets;

/// Inner rectangle where data is drawn. Immutable once laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotGeometry {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

impl PlotGeometry {
    /// Carve the plot out of `bounds`.
    ///
    /// `title` is reserved on top, `axis_margin` on the left, and `legend`
    /// wherever the legend position put it.
    pub fn layout(bounds: Rectangle, title: u32, axis_margin: u32, legend: Insets) -> Result<Self> {
        let x = bounds.top_left.x + (axis_margin + legend.left) as i32;
        let y = bounds.top_left.y + (title + legend.top) as i32;
        let width = bounds.size.width as i32 - (axis_margin + legend.hsum()) as i32;
        let height = bounds.size.height as i32 - (title + legend.vsum()) as i32;
        if width <= 0 || height <= 0 {
            return Err(ChartError::DegenerateGeometry { width, height });
        }
        Ok(Self { origin: Point::new(x, y), width, height })
    }

    pub const fn left(&self) -> i32 { self.origin.x }
    pub const fn top(&self) -> i32 { self.origin.y }
    /// Last pixel column inside the plot.
    pub const fn right(&self) -> i32 { self.origin.x + self.width - 1 }
    /// Last pixel row inside the plot.
    pub const fn bottom(&self) -> i32 { self.origin.y + self.height - 1 }

    /// Screen x of plot column `col`.
    #[inline]
    pub const fn column_x(&self, col: usize) -> i32 {
        self.origin.x + col as i32
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(self.width as u32, self.height as u32))
    }
}
