// File: crates/chart-core/src/pie.rs
// Summary: Pie chart of up to ten slices, repainted in full on every update.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::Color;
use crate::device::RasterDevice;
use crate::error::{ChartError, Result};
use crate::geometry::PlotGeometry;
use crate::legend::{LegendEntry, LegendPosition};
use crate::line::draw_title;
use crate::primitives::{draw_circle_outline, fill_wedge};
use crate::render::{repaint, ChartLayers};
use crate::series::{styles, SeriesStyle};
use crate::theme::Theme;
use crate::types::{MAX_SLICES, TITLE_HEIGHT};

/// Gap kept between the disk and the edge of its area.
const RIM: i32 = 2;

pub struct PieConfig {
    pub bounds: Rectangle,
    pub title: String,
    pub legend: LegendPosition,
    pub slices: Vec<SeriesStyle>,
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    pub title_height: u32,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(240, 160)),
            title: String::new(),
            legend: LegendPosition::Right,
            slices: styles(3, &[], &[Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE]),
            background: Rgb565::BLACK,
            frame: Rgb565::WHITE,
            text: Rgb565::WHITE,
            title_height: TITLE_HEIGHT,
        }
    }
}

impl PieConfig {
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background = theme.background;
        self.frame = theme.frame;
        self.text = theme.text;
        for (i, s) in self.slices.iter_mut().enumerate() {
            s.color = theme.series_color(i);
        }
        self
    }
}

pub struct PieChart {
    config: PieConfig,
    area: PlotGeometry,
    center: Point,
    radius: i32,
    values: Vec<f32>,
}

impl PieChart {
    pub fn new<D: RasterDevice>(config: PieConfig, dev: &mut D) -> Result<Self> {
        match config.slices.len() {
            0 => return Err(ChartError::NoSeries),
            n if n > MAX_SLICES => {
                return Err(ChartError::TooManySeries { requested: n, max: MAX_SLICES })
            }
            _ => {}
        }
        let legend_size = config.legend.reserve(&*dev, config.slices.iter().map(|s| s.name.as_str()));
        let area = PlotGeometry::layout(config.bounds, config.title_height, 0, config.legend.layout(legend_size))?;
        let center = Point::new(area.left() + area.width / 2, area.top() + area.height / 2);
        let radius = (area.width.min(area.height) / 2 - RIM).max(0);
        tracing::debug!(slices = config.slices.len(), radius, "pie chart laid out");

        let values = vec![0.0; config.slices.len()];
        let pie = Self { config, area, center, radius, values };
        dev.fill_rect(pie.config.bounds, pie.config.background);
        repaint(&pie, dev);
        Ok(pie)
    }

    /// Replace slice values. Extra values are dropped, missing ones read as zero.
    pub fn set_data(&mut self, values: &[f32]) {
        if values.len() > self.values.len() {
            tracing::trace!(given = values.len(), kept = self.values.len(), "extra pie values dropped");
        }
        for (i, slot) in self.values.iter_mut().enumerate() {
            *slot = values.get(i).copied().unwrap_or(0.0);
        }
    }

    pub fn draw<D: RasterDevice>(&self, dev: &mut D) {
        repaint(self, dev);
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Sum of the non-negative values.
    pub fn total(&self) -> f32 {
        self.values.iter().map(|v| weight(*v)).sum()
    }

    /// Clockwise sweep in degrees of each slice; empty when the total is not positive.
    pub fn sweeps(&self) -> Vec<f32> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }
        self.values.iter().map(|v| weight(*v) / total * 360.0).collect()
    }
}

/// Negative and NaN values count as nothing.
fn weight(v: f32) -> f32 {
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

impl ChartLayers for PieChart {
    fn draw_background(&self, dev: &mut dyn RasterDevice) {
        dev.fill_rect(self.area.rect(), self.config.background);
    }

    fn draw_series(&self, dev: &mut dyn RasterDevice) {
        let sweeps = self.sweeps();
        if sweeps.is_empty() {
            return;
        }
        let mut start = 0.0;
        for (style, sweep) in self.config.slices.iter().zip(sweeps) {
            fill_wedge(dev, self.center, self.radius, start, sweep, style.color);
            start += sweep;
        }
        draw_circle_outline(dev, self.center, self.radius, self.config.frame, self.config.background);
    }

    fn draw_title(&self, dev: &mut dyn RasterDevice) {
        draw_title(dev, self.config.bounds, &self.config.title, self.config.text, self.config.background);
    }

    fn draw_legend(&self, dev: &mut dyn RasterDevice) {
        let entries: Vec<LegendEntry<'_>> = self.config.slices.iter().map(SeriesStyle::legend_entry).collect();
        self.config.legend.draw(
            dev,
            self.config.bounds,
            self.area.rect(),
            self.config.title_height,
            &entries,
            self.config.text,
            self.config.background,
        );
    }
}
