// File: crates/chart-core/src/card.rs
// Summary: Single-value card: a title and a value string inside an outlined panel.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::color::{Color, VisibilityBoost};
use crate::device::{RasterDevice, TextAnchor};
use crate::primitives::{draw_rect_outline, Smoothing};
use crate::render::{repaint, ChartLayers};
use crate::theme::Theme;

const INSET: i32 = 4;

pub struct CardConfig {
    pub bounds: Rectangle,
    pub title: String,
    pub background: Color,
    pub frame: Color,
    pub text: Color,
    /// Color of the value string.
    pub accent: Color,
    pub boost: VisibilityBoost,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(100, 48)),
            title: String::new(),
            background: Rgb565::BLACK,
            frame: Rgb565::WHITE,
            text: Rgb565::WHITE,
            accent: Rgb565::GREEN,
            boost: VisibilityBoost::SQRT,
        }
    }
}

impl CardConfig {
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.background = theme.background;
        self.frame = theme.frame;
        self.text = theme.text;
        self.accent = theme.series_color(0);
        self
    }
}

pub struct Card {
    config: CardConfig,
    value: String,
}

impl Card {
    pub fn new<D: RasterDevice>(config: CardConfig, dev: &mut D) -> Self {
        let card = Self { config, value: String::new() };
        repaint(&card, dev);
        card
    }

    pub fn set_value<D: RasterDevice>(&mut self, dev: &mut D, value: impl Into<String>) {
        self.value = value.into();
        repaint(&*self, dev);
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ChartLayers for Card {
    fn draw_background(&self, dev: &mut dyn RasterDevice) {
        let bounds = self.config.bounds;
        dev.fill_rect(bounds, self.config.background);
        let smoothing = Smoothing::over(self.config.background).with_boost(self.config.boost);
        draw_rect_outline(dev, bounds, self.config.frame, smoothing);
    }

    fn draw_series(&self, dev: &mut dyn RasterDevice) {
        if self.value.is_empty() {
            return;
        }
        let b = self.config.bounds;
        // below the title line when there is one
        let title_band = if self.config.title.is_empty() { 0 } else { dev.text_height() + INSET };
        let at = Point::new(
            b.top_left.x + b.size.width as i32 / 2,
            b.top_left.y + (title_band + b.size.height as i32) / 2,
        );
        dev.draw_text(&self.value, at, TextAnchor::Center, self.config.accent, self.config.background);
    }

    fn draw_title(&self, dev: &mut dyn RasterDevice) {
        if self.config.title.is_empty() {
            return;
        }
        let at = self.config.bounds.top_left + Point::new(INSET, INSET);
        dev.draw_text(&self.config.title, at, TextAnchor::TopLeft, self.config.text, self.config.background);
    }
}
