// File: crates/chart-core/src/gauge.rs
// Summary: Ring gauge filled clockwise from 12 o'clock in proportion to its value.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::Point;

use crate::axis::format_tick;
use crate::color::{mix, Color};
use crate::device::{RasterDevice, TextAnchor};
use crate::error::Result;
use crate::primitives::{draw_circle_outline, fill_wedge};
use crate::render::{repaint, ChartLayers};
use crate::scale::ValueRange;
use crate::theme::Theme;

/// Share of the foreground mixed into the unfilled part of the ring.
const TRACK_WEIGHT: f32 = 0.25;

pub struct GaugeConfig {
    pub center: Point,
    pub radius: i32,
    /// Ring width; `None` derives it from the radius.
    pub thickness: Option<i32>,
    pub min: f32,
    pub max: f32,
    pub background: Color,
    pub foreground: Color,
    pub text: Color,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            center: Point::new(60, 60),
            radius: 50,
            thickness: None,
            min: 0.0,
            max: 100.0,
            background: Rgb565::BLACK,
            foreground: Rgb565::GREEN,
            text: Rgb565::WHITE,
        }
    }
}

impl GaugeConfig {
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background = theme.background;
        self.foreground = theme.series_color(0);
        self.text = theme.text;
        self
    }
}

pub struct Gauge {
    config: GaugeConfig,
    range: ValueRange,
    thickness: i32,
    value: f32,
}

impl Gauge {
    /// Paints the gauge at its minimum.
    pub fn new<D: RasterDevice>(config: GaugeConfig, dev: &mut D) -> Result<Self> {
        let range = ValueRange::new(config.min, config.max)?;
        let thickness = config.thickness.unwrap_or((config.radius / 5).max(2));
        tracing::debug!(radius = config.radius, thickness, min = range.min, max = range.max, "gauge created");
        let gauge = Self { config, range, thickness, value: range.min };
        repaint(&gauge, dev);
        Ok(gauge)
    }

    /// Clamp `value` into range, store it and redraw.
    pub fn set_value<D: RasterDevice>(&mut self, dev: &mut D, value: f32) {
        self.value = self.range.clamp(value);
        repaint(&*self, dev);
    }

    /// Takes effect on the next redraw.
    pub fn set_colors(&mut self, background: Color, foreground: Color) {
        self.config.background = background;
        self.config.foreground = foreground;
    }

    pub fn draw<D: RasterDevice>(&self, dev: &mut D) {
        repaint(self, dev);
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn inner_radius(&self) -> i32 {
        (self.config.radius - self.thickness).max(0)
    }

    /// Filled sweep in degrees, 0 at the minimum and 360 at the maximum.
    pub fn sweep(&self) -> f32 {
        self.range.fraction(self.value) * 360.0
    }

    fn track(&self) -> Color {
        mix(self.config.foreground, self.config.background, TRACK_WEIGHT)
    }
}

impl ChartLayers for Gauge {
    /// Clears the disk plus the outer feather ring.
    fn draw_background(&self, dev: &mut dyn RasterDevice) {
        if self.config.radius <= 0 {
            return;
        }
        dev.fill_circle(self.config.center, self.config.radius + 1, self.config.background);
    }

    fn draw_series(&self, dev: &mut dyn RasterDevice) {
        let GaugeConfig { center, radius, background, foreground, .. } = self.config;
        if radius <= 0 {
            return;
        }
        let track = self.track();
        dev.fill_circle(center, radius, track);
        fill_wedge(dev, center, radius, 0.0, self.sweep(), foreground);
        let inner = self.inner_radius();
        dev.fill_circle(center, inner, background);
        draw_circle_outline(dev, center, radius, track, background);
        draw_circle_outline(dev, center, inner, track, background);
    }

    /// Value printed in the hole.
    fn draw_title(&self, dev: &mut dyn RasterDevice) {
        if self.config.radius <= 0 {
            return;
        }
        dev.draw_text(
            &format_tick(self.value),
            self.config.center,
            TextAnchor::Center,
            self.config.text,
            self.config.background,
        );
    }
}
