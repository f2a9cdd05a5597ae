// File: crates/chart-core/src/recording.rs
// Summary: Headless RasterDevice that records every call; used by tests, benches and dry runs.

use std::collections::BTreeMap;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::color::Color;
use crate::device::{RasterDevice, TextAnchor};

/// Glyph cell assumed for text metrics (matches the 6x10 mono font).
pub const GLYPH: Size = Size::new(6, 10);

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Pixel { at: Point, color: Color },
    FillRect { rect: Rectangle, color: Color },
    DrawRect { rect: Rectangle, color: Color },
    FillCircle { center: Point, radius: i32, color: Color },
    DrawCircle { center: Point, radius: i32, color: Color },
    FillTriangle { points: [Point; 3], color: Color },
    Text { text: String, at: Point, anchor: TextAnchor, color: Color },
}

/// Records the call stream and keeps the last color written per pixel.
///
/// Only `write_pixel` and `fill_rect` update the pixel map; the other
/// primitives are recorded as calls.
#[derive(Default)]
pub struct RecordingDevice {
    pub ops: Vec<Op>,
    pixels: BTreeMap<Point, Color>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.pixels.clear();
    }

    pub fn pixel(&self, at: Point) -> Option<Color> {
        self.pixels.get(&at).copied()
    }

    /// Pixel writes in call order.
    pub fn pixel_writes(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Pixel { at, color } => Some((*at, *color)),
            _ => None,
        })
    }

    /// Number of `fill_rect` calls that covered exactly `rect`.
    pub fn fills_of(&self, rect: Rectangle) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect { rect: r, .. } if *r == rect))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl RasterDevice for RecordingDevice {
    fn write_pixel(&mut self, at: Point, color: Color) {
        self.pixels.insert(at, color);
        self.ops.push(Op::Pixel { at, color });
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        for p in rect.points() {
            self.pixels.insert(p, color);
        }
        self.ops.push(Op::FillRect { rect, color });
    }

    fn draw_rect(&mut self, rect: Rectangle, color: Color) {
        self.ops.push(Op::DrawRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.ops.push(Op::FillCircle { center, radius, color });
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        self.ops.push(Op::DrawCircle { center, radius, color });
    }

    fn fill_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Color) {
        self.ops.push(Op::FillTriangle { points: [p0, p1, p2], color });
    }

    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * GLYPH.width as i32
    }

    fn text_height(&self) -> i32 {
        GLYPH.height as i32
    }

    fn draw_text(&mut self, text: &str, at: Point, anchor: TextAnchor, fg: Color, _bg: Color) {
        self.ops.push(Op::Text { text: text.to_string(), at, anchor, color: fg });
    }
}
