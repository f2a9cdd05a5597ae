// File: crates/chart-core/src/render.rs
// Summary: Fixed repaint ordering shared by every chart type.

use crate::device::RasterDevice;

pub use crate::history::AdvancePolicy;

/// Layers of a chart, painted back to front by [`repaint`].
///
/// Charts without pixel history (pie, bar, gauge, card) repaint everything,
/// data included, on every update. The line graph draws incrementally and
/// only repaints when its history is cleared or shifted, replaying whatever
/// segments it still holds as its series layer.
pub trait ChartLayers {
    fn draw_background(&self, dev: &mut dyn RasterDevice);
    fn draw_axes(&self, _dev: &mut dyn RasterDevice) {}
    fn draw_series(&self, _dev: &mut dyn RasterDevice) {}
    fn draw_title(&self, dev: &mut dyn RasterDevice);
    fn draw_legend(&self, _dev: &mut dyn RasterDevice) {}
}

/// Background, axes, series, title, legend: always in that order so a later
/// layer is never erased by an earlier one.
pub fn repaint<C>(chart: &C, dev: &mut dyn RasterDevice)
where
    C: ChartLayers + ?Sized,
{
    chart.draw_background(dev);
    chart.draw_axes(dev);
    chart.draw_series(dev);
    chart.draw_title(dev);
    chart.draw_legend(dev);
}
