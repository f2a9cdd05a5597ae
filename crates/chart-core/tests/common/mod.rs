// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures for line graph integration tests.

#![allow(dead_code)]

use chart_core::{AdvancePolicy, LegendPosition, LineGraph, LineGraphConfig, RecordingDevice};
use chart_core::series::styles;
use chart_core::types::{AXIS_MARGIN, TITLE_HEIGHT};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Rows available to data in every fixture graph.
pub const PLOT_HEIGHT: u32 = 50;

/// Graph whose plot is exactly `plot_width` columns wide, legend below.
pub fn graph(dev: &mut RecordingDevice, series: usize, plot_width: u32, policy: AdvancePolicy) -> LineGraph {
    let config = LineGraphConfig {
        bounds: Rectangle::new(
            Point::zero(),
            Size::new(plot_width + AXIS_MARGIN, PLOT_HEIGHT + TITLE_HEIGHT + 15),
        ),
        legend: LegendPosition::Bottom,
        series: styles(series, &[], &[]),
        policy,
        ..LineGraphConfig::default()
    };
    LineGraph::new(config, dev).expect("fixture graph")
}

/// Plot `values[i]` into series `i` at the cursor, then advance.
pub fn column(g: &mut LineGraph, dev: &mut RecordingDevice, values: &[f32]) {
    for (s, v) in values.iter().enumerate() {
        g.plot_point(dev, s, *v);
    }
    g.advance(dev);
}
