// File: crates/chart-core/src/device.rs
// Summary: Raster device capability consumed by the core, plus an adapter for embedded-graphics targets.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use crate::color::Color;

/// Where a text anchor point sits relative to the rendered string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    Center,
    MiddleRight,
}

/// Everything the core needs from the display.
///
/// Every call carries its own color; implementations must not keep a
/// "current color" between calls. Pixels are written straight through,
/// the core never buffers a frame.
pub trait RasterDevice {
    fn write_pixel(&mut self, at: Point, color: Color);
    fn fill_rect(&mut self, rect: Rectangle, color: Color);
    /// One pixel wide, inside the rectangle bounds.
    fn draw_rect(&mut self, rect: Rectangle, color: Color);
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color);
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color);
    fn fill_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Color);
    fn text_width(&self, text: &str) -> i32;
    fn text_height(&self) -> i32;
    fn draw_text(&mut self, text: &str, at: Point, anchor: TextAnchor, fg: Color, bg: Color);
}

/// Drives any embedded-graphics `DrawTarget<Color = Rgb565>` as a [`RasterDevice`].
pub struct DrawTargetDevice<D> {
    target: D,
    font: &'static MonoFont<'static>,
}

impl<D> DrawTargetDevice<D>
where
    D: DrawTarget<Color = Color>,
{
    pub fn new(target: D) -> Self {
        Self { target, font: &FONT_6X10 }
    }

    pub fn with_font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = font;
        self
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

fn note<E>(res: Result<(), E>, what: &'static str) {
    if res.is_err() {
        tracing::trace!(primitive = what, "draw target rejected primitive");
    }
}

#[inline]
fn diameter(radius: i32) -> u32 {
    (radius * 2 + 1) as u32
}

impl<D> RasterDevice for DrawTargetDevice<D>
where
    D: DrawTarget<Color = Color>,
{
    fn write_pixel(&mut self, at: Point, color: Color) {
        note(Pixel(at, color).draw(&mut self.target), "pixel");
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        note(
            rect.into_styled(PrimitiveStyle::with_fill(color)).draw(&mut self.target),
            "fill_rect",
        );
    }

    fn draw_rect(&mut self, rect: Rectangle, color: Color) {
        note(
            rect.into_styled(PrimitiveStyle::with_stroke(color, 1)).draw(&mut self.target),
            "draw_rect",
        );
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        note(
            Circle::with_center(center, diameter(radius))
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(&mut self.target),
            "fill_circle",
        );
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) {
        if radius < 0 {
            return;
        }
        note(
            Circle::with_center(center, diameter(radius))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(&mut self.target),
            "draw_circle",
        );
    }

    fn fill_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: Color) {
        note(
            Triangle::new(p0, p1, p2)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(&mut self.target),
            "fill_triangle",
        );
    }

    fn text_width(&self, text: &str) -> i32 {
        let advance = self.font.character_size.width + self.font.character_spacing;
        (text.chars().count() as u32 * advance) as i32
    }

    fn text_height(&self) -> i32 {
        self.font.character_size.height as i32
    }

    fn draw_text(&mut self, text: &str, at: Point, anchor: TextAnchor, fg: Color, bg: Color) {
        let character_style = MonoTextStyleBuilder::new()
            .font(self.font)
            .text_color(fg)
            .background_color(bg)
            .build();
        let (alignment, baseline) = match anchor {
            TextAnchor::TopLeft => (Alignment::Left, Baseline::Top),
            TextAnchor::TopCenter => (Alignment::Center, Baseline::Top),
            TextAnchor::Center => (Alignment::Center, Baseline::Middle),
            TextAnchor::MiddleRight => (Alignment::Right, Baseline::Middle),
        };
        let text_style = TextStyleBuilder::new().alignment(alignment).baseline(baseline).build();
        note(
            Text::with_text_style(text, at, character_style, text_style)
                .draw(&mut self.target)
                .map(|_| ()),
            "text",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::Rgb565;

    fn device() -> DrawTargetDevice<MockDisplay<Rgb565>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        DrawTargetDevice::new(display)
    }

    #[test]
    fn pixel_and_rect_reach_the_target() {
        let mut dev = device();
        dev.write_pixel(Point::new(1, 2), Rgb565::RED);
        dev.fill_rect(Rectangle::new(Point::new(4, 4), Size::new(2, 2)), Rgb565::GREEN);
        let display = dev.target();
        assert_eq!(display.get_pixel(Point::new(1, 2)), Some(Rgb565::RED));
        assert_eq!(display.get_pixel(Point::new(5, 5)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(6, 6)), None);
    }

    #[test]
    fn circle_radius_is_centered() {
        let mut dev = device();
        dev.fill_circle(Point::new(10, 10), 3, Rgb565::BLUE);
        let display = dev.target();
        assert_eq!(display.get_pixel(Point::new(10, 10)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(13, 10)), Some(Rgb565::BLUE));
        assert_eq!(display.get_pixel(Point::new(15, 10)), None);
    }

    #[test]
    fn text_metrics_follow_font() {
        let dev = device();
        assert_eq!(dev.text_width("abc"), 18);
        assert_eq!(dev.text_height(), 10);
    }
}
