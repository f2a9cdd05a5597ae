// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the incremental chart renderers and the device model they draw through.

pub mod axis;
pub mod bar;
pub mod card;
pub mod color;
pub mod device;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod history;
pub mod legend;
pub mod line;
pub mod pie;
pub mod primitives;
pub mod recording;
pub mod render;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use bar::{BarChart, BarConfig};
pub use card::{Card, CardConfig};
pub use color::{Color, VisibilityBoost};
pub use device::{DrawTargetDevice, RasterDevice, TextAnchor};
pub use error::{ChartError, Result};
pub use gauge::{Gauge, GaugeConfig};
pub use geometry::PlotGeometry;
pub use history::{Advance, AdvancePolicy, BufferState, ScrollBuffer, SeriesHistory};
pub use legend::LegendPosition;
pub use line::{LineGraph, LineGraphConfig, PlotOutcome};
pub use pie::{PieChart, PieConfig};
pub use primitives::{draw_circle_outline, draw_line, draw_rect_outline, fill_circle_smoothed, Smoothing};
pub use recording::RecordingDevice;
pub use render::{repaint, ChartLayers};
pub use scale::{ValueRange, ValueScale};
pub use series::SeriesStyle;
pub use theme::Theme;
