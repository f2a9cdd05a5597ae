// File: crates/chart-core/src/line.rs
// Summary: Scrolling multi-series line graph drawn incrementally, one column per advance.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::axis::Axis;
use crate::color::{Color, VisibilityBoost};
use crate::device::{RasterDevice, TextAnchor};
use crate::error::Result;
use crate::geometry::PlotGeometry;
use crate::history::{Advance, AdvancePolicy, BufferState, ScrollBuffer, SeriesHistory};
use crate::legend::{LegendEntry, LegendPosition};
use crate::primitives::{draw_line, Smoothing};
use crate::render::{repaint, ChartLayers};
use crate::scale::{ValueRange, ValueScale};
use crate::series::SeriesStyle;
use crate::theme::Theme;
use crate::types::{AXIS_MARGIN, TITLE_HEIGHT};

pub struct LineGraphConfig {
    pub bounds: Rectangle,
    pub y_min: f32,
    pub y_max: f32,
    pub title: String,
    pub legend: LegendPosition,
    pub series: Vec<SeriesStyle>,
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    /// Value distance between Y ticks.
    pub y_step: f32,
    pub policy: AdvancePolicy,
    pub boost: VisibilityBoost,
    pub title_height: u32,
    pub axis_margin: u32,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(320, 240)),
            y_min: 0.0,
            y_max: 100.0,
            title: String::new(),
            legend: LegendPosition::Right,
            series: vec![SeriesStyle::numbered(0)],
            background: Rgb565::BLACK,
            frame: Rgb565::WHITE,
            text: Rgb565::WHITE,
            y_step: 10.0,
            policy: AdvancePolicy::Scroll,
            boost: VisibilityBoost::SQRT,
            title_height: TITLE_HEIGHT,
            axis_margin: AXIS_MARGIN,
        }
    }
}

impl LineGraphConfig {
    /// Take panel colors from `theme` and recolor series from its palette.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background = theme.background;
        self.frame = theme.frame;
        self.text = theme.text;
        for (i, s) in self.series.iter_mut().enumerate() {
            s.color = theme.series_color(i);
        }
        self
    }
}

/// What `plot_point` did with its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotOutcome {
    Plotted,
    /// Value was outside the range and was pinned to the nearest end.
    Clamped,
    /// Series index out of range; nothing stored or drawn.
    Ignored,
}

pub struct LineGraph {
    config: LineGraphConfig,
    plot: PlotGeometry,
    scale: ValueScale,
    axis: Axis,
    buffer: ScrollBuffer,
}

impl LineGraph {
    /// Validate `config`, lay out the plot and paint the empty chart.
    pub fn new<D: RasterDevice>(config: LineGraphConfig, dev: &mut D) -> Result<Self> {
        let range = ValueRange::new(config.y_min, config.y_max)?;
        let legend_size = config.legend.reserve(&*dev, config.series.iter().map(|s| s.name.as_str()));
        let plot = PlotGeometry::layout(
            config.bounds,
            config.title_height,
            config.axis_margin,
            config.legend.layout(legend_size),
        )?;
        let buffer = ScrollBuffer::new(config.series.len(), plot.width as u32, plot.bottom())?;
        let scale = ValueScale::new(plot.bottom(), plot.top(), range);
        let axis = Axis::new(range, config.y_step);

        tracing::debug!(
            series = config.series.len(),
            plot_w = plot.width,
            plot_h = plot.height,
            policy = ?config.policy,
            "line graph laid out"
        );

        let graph = Self { config, plot, scale, axis, buffer };
        dev.fill_rect(graph.config.bounds, graph.config.background);
        repaint(&graph, dev);
        Ok(graph)
    }

    #[inline]
    fn smoothing(&self) -> Smoothing {
        Smoothing::over(self.config.background).with_boost(self.config.boost)
    }

    /// Plot `value` for `series` at the cursor column and connect it to the
    /// previous column with an anti-aliased segment.
    ///
    /// `y_min` lands on the bottom plot row, which doubles as the history's
    /// "nothing plotted" marker. Such points draw now but are not replayed
    /// after a scroll, so a series resting at `y_min` drops out of the
    /// shifted plot.
    pub fn plot_point<D: RasterDevice>(&mut self, dev: &mut D, series: usize, value: f32) -> PlotOutcome {
        let Some(color) = self.config.series.get(series).map(|s| s.color) else {
            tracing::trace!(series, "point for unknown series ignored");
            return PlotOutcome::Ignored;
        };
        let pinned = self.scale.range.clamp(value);
        let outcome = if pinned == value {
            PlotOutcome::Plotted
        } else {
            tracing::trace!(series, value, pinned, "value clamped into range");
            PlotOutcome::Clamped
        };

        let row = self.scale.to_row(pinned);
        let x = self.plot.column_x(self.buffer.cursor());
        if let Some(Some(prev)) = self.buffer.store(series, row) {
            draw_line(dev, Point::new(x - 1, prev), Point::new(x, row), color, self.smoothing());
        }
        outcome
    }

    /// Move to the next column. At the right edge the advance policy either
    /// clears and restarts, or shifts everything left and replays it.
    pub fn advance<D: RasterDevice>(&mut self, dev: &mut D) -> Advance {
        let step = self.buffer.advance(self.config.policy);
        match step {
            Advance::Moved => {}
            Advance::Wrapped => {
                tracing::debug!("right edge reached, wrapping to column 0");
                repaint(&*self, dev);
            }
            Advance::Scrolled => {
                tracing::debug!(cursor = self.buffer.cursor(), "right edge reached, scrolling");
                repaint(&*self, dev);
            }
        }
        step
    }

    /// Clear all history and repaint, wherever the cursor was.
    pub fn reset<D: RasterDevice>(&mut self, dev: &mut D) {
        tracing::debug!(cursor = self.buffer.cursor(), "line graph reset");
        self.buffer.reset();
        repaint(&*self, dev);
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn state(&self) -> BufferState {
        self.buffer.state()
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.plot
    }

    pub fn scale(&self) -> &ValueScale {
        &self.scale
    }

    pub fn history(&self, series: usize) -> Option<&SeriesHistory> {
        self.buffer.history(series)
    }

    pub fn series_count(&self) -> usize {
        self.buffer.series_count()
    }

    pub fn config(&self) -> &LineGraphConfig {
        &self.config
    }
}

impl ChartLayers for LineGraph {
    fn draw_background(&self, dev: &mut dyn RasterDevice) {
        let rect = self.plot.rect();
        dev.fill_rect(rect, self.config.background);
        dev.draw_rect(rect, self.config.frame);
    }

    fn draw_axes(&self, dev: &mut dyn RasterDevice) {
        self.axis.draw(dev, &self.plot, self.config.text, self.config.background);
    }

    /// Replays every held segment whose two ends are both plotted.
    fn draw_series(&self, dev: &mut dyn RasterDevice) {
        let smoothing = self.smoothing();
        for (style, history) in self.config.series.iter().zip(self.buffer.histories()) {
            for (col, a, b) in history.segments() {
                let x = self.plot.column_x(col);
                draw_line(dev, Point::new(x, a), Point::new(x + 1, b), style.color, smoothing);
            }
        }
    }

    fn draw_title(&self, dev: &mut dyn RasterDevice) {
        draw_title(dev, self.config.bounds, &self.config.title, self.config.text, self.config.background);
    }

    fn draw_legend(&self, dev: &mut dyn RasterDevice) {
        let entries: Vec<LegendEntry<'_>> = self.config.series.iter().map(SeriesStyle::legend_entry).collect();
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

/// Title centered along the top edge of `bounds`. Empty titles draw nothing.
pub(crate) fn draw_title(dev: &mut dyn RasterDevice, bounds: Rectangle, title: &str, fg: Color, bg: Color) {
    if title.is_empty() {
        return;
    }
    let at = Point::new(bounds.top_left.x + bounds.size.width as i32 / 2, bounds.top_left.y + 2);
    dev.draw_text(title, at, TextAnchor::TopCenter, fg, bg);
}
