// File: crates/chart-core/src/primitives.rs
// Summary: Anti-aliased line, rectangle and circle drawing on top of single-pixel writes.
// Notes:
// - Lines use Wu's algorithm, including its fractional endpoint coverage.
// - Rectangle corners are touched by two edges and end up blended twice.
// - Circles are feathered with two half-strength rings instead of true coverage.

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::color::{mix, Color, VisibilityBoost};
use crate::device::RasterDevice;

/// Background and tone curve used when blending coverage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    pub background: Color,
    pub boost: VisibilityBoost,
}

impl Smoothing {
    pub fn over(background: Color) -> Self {
        Self { background, boost: VisibilityBoost::default() }
    }

    pub fn with_boost(mut self, boost: VisibilityBoost) -> Self {
        self.boost = boost;
        self
    }

    #[inline]
    fn shade(&self, fg: Color, coverage: f32) -> Color {
        self.boost.blend(fg, self.background, coverage)
    }
}

#[inline]
fn fpart(v: f32) -> f32 {
    v - v.floor()
}

#[inline]
fn rfpart(v: f32) -> f32 {
    1.0 - fpart(v)
}

/// Wu anti-aliased line from `p0` to `p1`.
///
/// Every visited column writes two pixels straddling the exact intercept,
/// including pixels whose coverage is zero (they receive the background).
pub fn draw_line<D>(dev: &mut D, p0: Point, p1: Point, fg: Color, smoothing: Smoothing)
where
    D: RasterDevice + ?Sized,
{
    let (mut x0, mut y0) = (p0.x as f32, p0.y as f32);
    let (mut x1, mut y1) = (p1.x as f32, p1.y as f32);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

    let mut plot = |x: i32, y: i32, coverage: f32| {
        let at = if steep { Point::new(y, x) } else { Point::new(x, y) };
        dev.write_pixel(at, smoothing.shade(fg, coverage));
    };

    // first endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    plot(xpxl1, ypxl1, rfpart(yend) * xgap);
    plot(xpxl1, ypxl1 + 1, fpart(yend) * xgap);
    let mut intery = yend + gradient;

    // second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;
    plot(xpxl2, ypxl2, rfpart(yend) * xgap);
    plot(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    for x in (xpxl1 + 1)..xpxl2 {
        let y = intery.floor() as i32;
        plot(x, y, rfpart(intery));
        plot(x, y + 1, fpart(intery));
        intery += gradient;
    }
}

/// Outline `rect` with four Wu lines. An empty rectangle draws nothing.
pub fn draw_rect_outline<D>(dev: &mut D, rect: Rectangle, fg: Color, smoothing: Smoothing)
where
    D: RasterDevice + ?Sized,
{
    let Some(br) = rect.bottom_right() else { return };
    let tl = rect.top_left;
    let tr = Point::new(br.x, tl.y);
    let bl = Point::new(tl.x, br.y);
    draw_line(dev, tl, tr, fg, smoothing);
    draw_line(dev, tr, br, fg, smoothing);
    draw_line(dev, br, bl, fg, smoothing);
    draw_line(dev, bl, tl, fg, smoothing);
}

/// Exact ring at `radius` feathered by half-strength rings one pixel inside and outside.
pub fn draw_circle_outline<D>(dev: &mut D, center: Point, radius: i32, fg: Color, background: Color)
where
    D: RasterDevice + ?Sized,
{
    if radius <= 0 {
        return;
    }
    let feather = mix(fg, background, 0.5);
    dev.draw_circle(center, radius, fg);
    if radius > 1 {
        dev.draw_circle(center, radius - 1, feather);
    }
    dev.draw_circle(center, radius + 1, feather);
}

/// Opaque disk with a feathered edge.
pub fn fill_circle_smoothed<D>(dev: &mut D, center: Point, radius: i32, fg: Color, background: Color)
where
    D: RasterDevice + ?Sized,
{
    if radius <= 0 {
        return;
    }
    dev.fill_circle(center, radius, fg);
    draw_circle_outline(dev, center, radius, fg, background);
}

/// Point on the circle of `radius` around `center`, `deg` degrees clockwise from 12 o'clock.
pub fn polar(center: Point, radius: i32, deg: f32) -> Point {
    let (sin, cos) = deg.to_radians().sin_cos();
    Point::new(
        center.x + (radius as f32 * sin).round() as i32,
        center.y - (radius as f32 * cos).round() as i32,
    )
}

/// Filled wedge from `start_deg` sweeping `sweep_deg` clockwise, built from
/// triangles at most one degree wide. Non-positive sweeps and non-finite
/// start angles draw nothing.
pub fn fill_wedge<D>(dev: &mut D, center: Point, radius: i32, start_deg: f32, sweep_deg: f32, color: Color)
where
    D: RasterDevice + ?Sized,
{
    if radius <= 0 || !start_deg.is_finite() || sweep_deg.is_nan() || sweep_deg <= 0.0 {
        return;
    }
    // keep angles small so one-degree steps stay representable
    let start = start_deg.rem_euclid(360.0);
    let sweep = sweep_deg.min(360.0);
    let end = start + sweep;
    let steps = sweep.ceil() as u32;
    for i in 0..steps {
        let a = start + i as f32;
        let b = (a + 1.0).min(end);
        dev.fill_triangle(center, polar(center, radius, a), polar(center, radius, b), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingDevice};
    use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
    use embedded_graphics::prelude::Size;
    use std::collections::BTreeSet;

    fn smooth() -> Smoothing {
        Smoothing::over(Rgb565::BLACK)
    }

    #[test]
    fn degenerate_line_touches_two_pixels() {
        for p in [Point::new(0, 0), Point::new(7, -3), Point::new(-20, 11)] {
            let mut dev = RecordingDevice::new();
            draw_line(&mut dev, p, p, Rgb565::WHITE, smooth());
            let touched: BTreeSet<Point> = dev.pixel_writes().map(|(at, _)| at).collect();
            assert_eq!(touched, BTreeSet::from([p, p + Point::new(0, 1)]));
            assert_eq!(dev.pixel(p + Point::new(0, 1)), Some(Rgb565::BLACK));
        }
    }

    #[test]
    fn horizontal_line_has_soft_caps() {
        let mut dev = RecordingDevice::new();
        draw_line(&mut dev, Point::new(0, 5), Point::new(4, 5), Rgb565::WHITE, smooth());
        for x in 1..4 {
            assert_eq!(dev.pixel(Point::new(x, 5)), Some(Rgb565::WHITE));
            assert_eq!(dev.pixel(Point::new(x, 6)), Some(Rgb565::BLACK));
        }
        let cap = crate::color::blend(Rgb565::WHITE, Rgb565::BLACK, 0.5);
        assert_eq!(dev.pixel(Point::new(0, 5)), Some(cap));
        assert_eq!(dev.pixel(Point::new(4, 5)), Some(cap));
    }

    #[test]
    fn steep_line_walks_rows() {
        let mut dev = RecordingDevice::new();
        draw_line(&mut dev, Point::new(2, 0), Point::new(2, 6), Rgb565::RED, smooth());
        for y in 1..6 {
            assert_eq!(dev.pixel(Point::new(2, y)), Some(Rgb565::RED));
        }
        // steep lines spill to the next column, never to the next row
        assert!(dev.pixel_writes().all(|(at, _)| at.x == 2 || at.x == 3));
    }

    #[test]
    fn diagonal_splits_coverage() {
        let mut dev = RecordingDevice::new();
        draw_line(&mut dev, Point::new(0, 0), Point::new(4, 2), Rgb565::WHITE, smooth());
        // intercept at x=1 is 0.5: both straddling pixels get equal weight
        let half = crate::color::blend(Rgb565::WHITE, Rgb565::BLACK, 0.5);
        assert_eq!(dev.pixel(Point::new(1, 0)), Some(half));
        assert_eq!(dev.pixel(Point::new(1, 1)), Some(half));
        assert_eq!(dev.pixel(Point::new(2, 1)), Some(Rgb565::WHITE));
    }

    #[test]
    fn reversed_endpoints_draw_the_same_pixels() {
        let mut a = RecordingDevice::new();
        let mut b = RecordingDevice::new();
        draw_line(&mut a, Point::new(1, 9), Point::new(13, 2), Rgb565::GREEN, smooth());
        draw_line(&mut b, Point::new(13, 2), Point::new(1, 9), Rgb565::GREEN, smooth());
        let pa: Vec<_> = a.pixel_writes().collect();
        let pb: Vec<_> = b.pixel_writes().collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn rect_outline_is_four_edges() {
        let mut dev = RecordingDevice::new();
        let rect = Rectangle::new(Point::new(2, 3), Size::new(5, 4));
        draw_rect_outline(&mut dev, rect, Rgb565::WHITE, smooth());
        assert_eq!(dev.pixel(Point::new(4, 3)), Some(Rgb565::WHITE));
        assert_eq!(dev.pixel(Point::new(6, 4)), Some(Rgb565::WHITE));
        assert_eq!(dev.pixel(Point::new(4, 6)), Some(Rgb565::WHITE));
        assert_eq!(dev.pixel(Point::new(2, 5)), Some(Rgb565::WHITE));
        // corner pixels are written by both adjacent edges
        let corner_hits = dev.pixel_writes().filter(|(at, _)| *at == Point::new(2, 3)).count();
        assert!(corner_hits >= 2);

        let mut empty = RecordingDevice::new();
        draw_rect_outline(&mut empty, Rectangle::new(Point::zero(), Size::new(0, 4)), Rgb565::WHITE, smooth());
        assert!(empty.ops.is_empty());
    }

    #[test]
    fn circle_outline_feathers_both_sides() {
        let mut dev = RecordingDevice::new();
        draw_circle_outline(&mut dev, Point::new(10, 10), 5, Rgb565::WHITE, Rgb565::BLACK);
        let feather = mix(Rgb565::WHITE, Rgb565::BLACK, 0.5);
        assert_eq!(
            dev.ops,
            vec![
                Op::DrawCircle { center: Point::new(10, 10), radius: 5, color: Rgb565::WHITE },
                Op::DrawCircle { center: Point::new(10, 10), radius: 4, color: feather },
                Op::DrawCircle { center: Point::new(10, 10), radius: 6, color: feather },
            ]
        );
    }

    #[test]
    fn non_positive_radius_is_a_no_op() {
        let mut dev = RecordingDevice::new();
        for r in [0, -4] {
            draw_circle_outline(&mut dev, Point::new(3, 3), r, Rgb565::WHITE, Rgb565::BLACK);
            fill_circle_smoothed(&mut dev, Point::new(3, 3), r, Rgb565::WHITE, Rgb565::BLACK);
        }
        assert!(dev.ops.is_empty());
    }

    #[test]
    fn smoothed_disk_fills_then_outlines() {
        let mut dev = RecordingDevice::new();
        fill_circle_smoothed(&mut dev, Point::new(0, 0), 1, Rgb565::BLUE, Rgb565::BLACK);
        assert!(matches!(dev.ops[0], Op::FillCircle { radius: 1, .. }));
        // radius 1 has no inner feather ring
        assert_eq!(dev.ops.len(), 3);
    }

    #[test]
    fn polar_starts_at_twelve_and_turns_clockwise() {
        let c = Point::new(50, 50);
        assert_eq!(polar(c, 10, 0.0), Point::new(50, 40));
        assert_eq!(polar(c, 10, 90.0), Point::new(60, 50));
        assert_eq!(polar(c, 10, 180.0), Point::new(50, 60));
    }

    #[test]
    fn wedge_is_one_triangle_per_degree() {
        let mut dev = RecordingDevice::new();
        fill_wedge(&mut dev, Point::new(20, 20), 10, 0.0, 90.0, Rgb565::RED);
        assert_eq!(dev.ops.len(), 90);
        dev.clear();
        fill_wedge(&mut dev, Point::new(20, 20), 10, 0.0, 2.5, Rgb565::RED);
        assert_eq!(dev.ops.len(), 3);
        dev.clear();
        fill_wedge(&mut dev, Point::new(20, 20), 10, 0.0, 0.0, Rgb565::RED);
        fill_wedge(&mut dev, Point::new(20, 20), 0, 0.0, 45.0, Rgb565::RED);
        fill_wedge(&mut dev, Point::new(20, 20), 10, f32::NAN, 45.0, Rgb565::RED);
        fill_wedge(&mut dev, Point::new(20, 20), 10, f32::INFINITY, 45.0, Rgb565::RED);
        assert!(dev.ops.is_empty());
    }

    #[test]
    fn huge_start_angles_wrap_into_one_turn() {
        let center = Point::new(20, 20);
        let mut far = RecordingDevice::new();
        fill_wedge(&mut far, center, 10, 1.0e8, 90.0, Rgb565::RED);
        assert_eq!(far.ops.len(), 90);

        // same wedge as its angle reduced by whole turns
        let mut near = RecordingDevice::new();
        fill_wedge(&mut near, center, 10, 1.0e8_f32.rem_euclid(360.0), 90.0, Rgb565::RED);
        assert_eq!(far.ops, near.ops);

        let mut back = RecordingDevice::new();
        fill_wedge(&mut back, center, 10, -270.0, 90.0, Rgb565::RED);
        let mut fwd = RecordingDevice::new();
        fill_wedge(&mut fwd, center, 10, 90.0, 90.0, Rgb565::RED);
        assert_eq!(back.ops, fwd.ops);
        assert!(matches!(
            fwd.ops.first(),
            Some(Op::FillTriangle { points, .. }) if points[1] == Point::new(30, 20)
        ));
    }
}
