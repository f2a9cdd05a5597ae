// File: crates/chart-core/src/bar.rs
// Summary: Vertical bar chart scaled to its largest value, repainted in full on every update.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::axis::Axis;
use crate::color::{Color, VisibilityBoost};
use crate::device::RasterDevice;
use crate::error::{ChartError, Result};
use crate::geometry::PlotGeometry;
use crate::legend::{LegendEntry, LegendPosition};
use crate::line::draw_title;
use crate::primitives::{draw_rect_outline, Smoothing};
use crate::render::{repaint, ChartLayers};
use crate::scale::ValueRange;
use crate::series::{styles, SeriesStyle};
use crate::theme::Theme;
use crate::types::{AXIS_MARGIN, MAX_SLICES, TITLE_HEIGHT};

/// Number of tick intervals between zero and the largest value.
const TICK_DIVISIONS: f32 = 4.0;

pub struct BarConfig {
    pub bounds: Rectangle,
    pub title: String,
    pub legend: LegendPosition,
    pub bars: Vec<SeriesStyle>,
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    pub boost: VisibilityBoost,
    pub title_height: u32,
    pub axis_margin: u32,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(240, 160)),
            title: String::new(),
            legend: LegendPosition::Bottom,
            bars: styles(3, &[], &[Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE]),
            background: Rgb565::BLACK,
            frame: Rgb565::WHITE,
            text: Rgb565::WHITE,
            boost: VisibilityBoost::SQRT,
            title_height: TITLE_HEIGHT,
            axis_margin: AXIS_MARGIN,
        }
    }
}

impl BarConfig {
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background = theme.background;
        self.frame = theme.frame;
        self.text = theme.text;
        for (i, s) in self.bars.iter_mut().enumerate() {
            s.color = theme.series_color(i);
        }
        self
    }
}

pub struct BarChart {
    config: BarConfig,
    plot: PlotGeometry,
    values: Vec<f32>,
}

impl BarChart {
    pub fn new<D: RasterDevice>(config: BarConfig, dev: &mut D) -> Result<Self> {
        match config.bars.len() {
            0 => return Err(ChartError::NoSeries),
            n if n > MAX_SLICES => {
                return Err(ChartError::TooManySeries { requested: n, max: MAX_SLICES })
            }
            _ => {}
        }
        let legend_size = config.legend.reserve(&*dev, config.bars.iter().map(|s| s.name.as_str()));
        let plot = PlotGeometry::layout(
            config.bounds,
            config.title_height,
            config.axis_margin,
            config.legend.layout(legend_size),
        )?;
        tracing::debug!(bars = config.bars.len(), plot_w = plot.width, plot_h = plot.height, "bar chart laid out");

        let values = vec![0.0; config.bars.len()];
        let chart = Self { config, plot, values };
        dev.fill_rect(chart.config.bounds, chart.config.background);
        repaint(&chart, dev);
        Ok(chart)
    }

    /// Replace bar values. Extra values are dropped, missing ones read as zero.
    pub fn set_data(&mut self, values: &[f32]) {
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

    pub fn geometry(&self) -> &PlotGeometry {
        &self.plot
    }

    /// Largest value, or zero when there is nothing positive to scale by.
    pub fn max_value(&self) -> f32 {
        self.values.iter().copied().filter(|v| *v > 0.0).fold(0.0, f32::max)
    }

    /// Screen rectangle of every bar with a visible height, by index.
    ///
    /// Bars stand on a row two pixels above the frame and never reach the
    /// top frame line, so their outlines stay inside the plot.
    pub fn bar_rects(&self) -> Vec<(usize, Rectangle)> {
        let max = self.max_value();
        if max <= 0.0 {
            return Vec::new();
        }
        let n = self.values.len() as i32;
        let slot = (self.plot.width / n).max(1);
        let width = (slot * 3 / 4).max(1);
        let floor = self.plot.bottom() - 2;
        let reach = (self.plot.height - 4).max(0) as f32;
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| {
                let h = (v.max(0.0) / max * reach).round() as i32;
                if h <= 0 {
                    return None;
                }
                let x = self.plot.left() + i as i32 * slot + (slot - width) / 2;
                Some((i, Rectangle::new(Point::new(x, floor - h + 1), Size::new(width as u32, h as u32))))
            })
            .collect()
    }
}

impl ChartLayers for BarChart {
    fn draw_background(&self, dev: &mut dyn RasterDevice) {
        let rect = self.plot.rect();
        dev.fill_rect(rect, self.config.background);
        dev.draw_rect(rect, self.config.frame);
    }

    fn draw_axes(&self, dev: &mut dyn RasterDevice) {
        let max = self.max_value();
        if let Ok(range) = ValueRange::new(0.0, max) {
            Axis::new(range, max / TICK_DIVISIONS).draw(dev, &self.plot, self.config.text, self.config.background);
        }
    }

    fn draw_series(&self, dev: &mut dyn RasterDevice) {
        let smoothing = Smoothing::over(self.config.background).with_boost(self.config.boost);
        // Wu pairs on integer edges spill their zero-coverage half one pixel
        // inward; the fill goes on last to cover it.
        for (i, rect) in self.bar_rects() {
            let color = self.config.bars[i].color;
            draw_rect_outline(dev, rect, color, smoothing);
            dev.fill_rect(rect, color);
        }
    }

    fn draw_title(&self, dev: &mut dyn RasterDevice) {
        draw_title(dev, self.config.bounds, &self.config.title, self.config.text, self.config.background);
    }

    fn draw_legend(&self, dev: &mut dyn RasterDevice) {
        let entries: Vec<LegendEntry<'_>> = self.config.bars.iter().map(SeriesStyle::legend_entry).collect();
        self.config.legend.draw(
            dev,
            self.config.bounds,
            self.plot.rect(),
            self.config.title_height,
            &entries,
            self.config.text,
            self.config.background,
        );
    }
}
