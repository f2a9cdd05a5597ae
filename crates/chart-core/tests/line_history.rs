// File: crates/chart-core/tests/line_history.rs
// Purpose: Line graph history, cursor and repaint behavior at the right edge.

mod common;

use chart_core::{Advance, AdvancePolicy, BufferState, RecordingDevice};
use common::{column, graph, PLOT_HEIGHT};

fn rows(g: &chart_core::LineGraph, series: usize) -> Vec<i32> {
    g.history(series).expect("series exists").rows().to_vec()
}

#[test]
fn scroll_shifts_history_and_pins_cursor() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 2, 4, AdvancePolicy::Scroll);
    let plot = g.geometry().rect();
    let baseline = g.geometry().bottom();

    column(&mut g, &mut dev, &[10.0, 90.0]);
    column(&mut g, &mut dev, &[20.0, 80.0]);
    column(&mut g, &mut dev, &[30.0, 70.0]);
    g.plot_point(&mut dev, 0, 40.0);
    g.plot_point(&mut dev, 1, 60.0);
    assert_eq!(g.cursor(), 3);
    assert_eq!(g.state(), BufferState::Full);

    let before = [rows(&g, 0), rows(&g, 1)];
    dev.clear();
    assert_eq!(g.advance(&mut dev), Advance::Scrolled);
    assert_eq!(g.cursor(), 3);
    assert_eq!(dev.fills_of(plot), 1);
    for (s, old) in before.iter().enumerate() {
        let now = rows(&g, s);
        assert_eq!(now[0..3], old[1..4]);
        assert_eq!(now[3], baseline);
    }

    // every crossing after the first shifts once more
    for k in 0..3 {
        dev.clear();
        g.plot_point(&mut dev, 0, 50.0 + k as f32);
        assert_eq!(g.advance(&mut dev), Advance::Scrolled);
        assert_eq!(g.cursor(), 3);
        assert_eq!(dev.fills_of(plot), 1);
    }
}

#[test]
fn scroll_replays_surviving_segments() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 1, 4, AdvancePolicy::Scroll);
    for v in [10.0, 50.0, 90.0] {
        column(&mut g, &mut dev, &[v]);
    }
    g.plot_point(&mut dev, 0, 30.0);
    dev.clear();
    g.advance(&mut dev);
    // columns 0..=2 still hold plotted rows, so two segments come back
    assert_eq!(g.history(0).map(|h| h.segments().count()), Some(2));
    let plot = g.geometry();
    assert!(dev.pixel_writes().all(|(p, _)| p.x >= plot.left() && p.x <= plot.right() + 1));
    assert!(dev.pixel_writes().count() > 0);
}

#[test]
fn wrap_clears_everything_and_restarts() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 2, 3, AdvancePolicy::Wrap);
    let baseline = g.geometry().bottom();
    column(&mut g, &mut dev, &[25.0, 75.0]);
    column(&mut g, &mut dev, &[35.0, 65.0]);
    g.plot_point(&mut dev, 0, 45.0);
    dev.clear();
    assert_eq!(g.advance(&mut dev), Advance::Wrapped);
    assert_eq!(g.cursor(), 0);
    assert_eq!(g.state(), BufferState::Empty);
    assert!(rows(&g, 0).iter().chain(rows(&g, 1).iter()).all(|r| *r == baseline));
    assert_eq!(dev.fills_of(g.geometry().rect()), 1);
    assert_eq!(dev.pixel_writes().count(), 0);
}

#[test]
fn cells_past_the_cursor_stay_at_baseline() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 1, 20, AdvancePolicy::Scroll);
    let baseline = g.geometry().bottom();
    let k = 7;
    for i in 0..k {
        g.plot_point(&mut dev, 0, 10.0 + i as f32 * 5.0);
        if i + 1 < k {
            g.advance(&mut dev);
        }
    }
    let cells = rows(&g, 0);
    assert!(cells[..k].iter().all(|r| *r != baseline));
    assert!(cells[k..].iter().all(|r| *r == baseline));
}

#[test]
fn range_ends_map_to_plot_edges() {
    let mut dev = RecordingDevice::new();
    let g = graph(&mut dev, 1, 10, AdvancePolicy::Scroll);
    let plot = g.geometry();
    let scale = g.scale();
    assert_eq!(plot.height, PLOT_HEIGHT as i32);
    assert_eq!(scale.to_row(0.0), plot.bottom());
    assert_eq!(scale.to_row(100.0), plot.top());
    let mut last = scale.to_row(0.0);
    for v in 1..=100 {
        let row = scale.to_row(v as f32);
        assert!(row <= last, "rows must not move down as values grow");
        last = row;
    }
}

#[test]
fn reset_mid_plot_returns_to_empty() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 2, 8, AdvancePolicy::Scroll);
    column(&mut g, &mut dev, &[40.0, 60.0]);
    column(&mut g, &mut dev, &[45.0, 55.0]);
    dev.clear();
    g.reset(&mut dev);
    assert_eq!(g.cursor(), 0);
    assert_eq!(g.state(), BufferState::Empty);
    assert_eq!(dev.fills_of(g.geometry().rect()), 1);
    assert!(g.history(1).is_some_and(|h| h.is_blank()));
}

#[test]
fn floor_values_draw_live_but_are_not_replayed() {
    let mut dev = RecordingDevice::new();
    let mut g = graph(&mut dev, 2, 4, AdvancePolicy::Scroll);
    let baseline = g.geometry().bottom();
    let mid = g.scale().to_row(50.0);
    assert_eq!(g.scale().to_row(0.0), baseline);

    for _ in 0..3 {
        column(&mut g, &mut dev, &[0.0, 50.0]);
    }
    dev.clear();
    g.plot_point(&mut dev, 0, 0.0);
    g.plot_point(&mut dev, 1, 50.0);
    // the live segment on the floor row is drawn
    assert!(dev.pixel_writes().any(|(p, _)| p.y == baseline));
    assert!(g.history(0).is_some_and(|h| h.is_blank()));

    dev.clear();
    assert_eq!(g.advance(&mut dev), Advance::Scrolled);
    // the floor series is indistinguishable from "never plotted", so only
    // the mid series comes back
    assert_eq!(g.history(0).map(|h| h.segments().count()), Some(0));
    assert_eq!(g.history(1).map(|h| h.segments().count()), Some(2));
    assert!(dev.pixel_writes().all(|(p, _)| p.y != baseline));
    assert!(dev.pixel_writes().any(|(p, _)| p.y == mid));
}

#[test]
fn rejects_oversized_configurations() {
    use chart_core::series::styles;
    use chart_core::{ChartError, LineGraph, LineGraphConfig};
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;

    let mut dev = RecordingDevice::new();
    let six = LineGraphConfig { series: styles(6, &[], &[]), ..LineGraphConfig::default() };
    assert_eq!(
        LineGraph::new(six, &mut dev).err(),
        Some(ChartError::TooManySeries { requested: 6, max: 5 })
    );

    let wide = LineGraphConfig {
        bounds: Rectangle::new(Point::zero(), Size::new(800, 240)),
        ..LineGraphConfig::default()
    };
    assert!(matches!(LineGraph::new(wide, &mut dev), Err(ChartError::PlotTooWide { .. })));

    let flat = LineGraphConfig { y_min: 5.0, y_max: 5.0, ..LineGraphConfig::default() };
    assert!(matches!(LineGraph::new(flat, &mut dev), Err(ChartError::EmptyValueRange { .. })));
}
