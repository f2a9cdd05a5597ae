// File: crates/chart-core/src/error.rs
// Summary: Construction-time configuration errors. Drawing itself never fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("a chart needs at least one series")]
    NoSeries,
    #[error("{requested} series requested, at most {max} are supported")]
    TooManySeries { requested: usize, max: usize },
    #[error("plot is {width} px wide, at most {max} columns are supported")]
    PlotTooWide { width: u32, max: u32 },
    #[error("value range [{min}, {max}] is empty")]
    EmptyValueRange { min: f32, max: f32 },
    #[error("plot area collapsed to {width}x{height} px after layout")]
    DegenerateGeometry { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, ChartError>;
