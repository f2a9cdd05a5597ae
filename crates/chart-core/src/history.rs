// File: crates/chart-core/src/history.rs
// Summary: Per-series history of the last drawn pixel row per column, with a shared cursor.
// Notes:
// - Only rows are kept, never values: memory is series x width cells and the
//   only thing that can be redrawn from it is the connecting segments.
// - A cell equal to the baseline row means "nothing plotted in this column".

use crate::error::{ChartError, Result};
use crate::types::{MAX_COLUMNS, MAX_SERIES};

/// Last drawn row for each plot column of one series.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesHistory {
    rows: Vec<i32>,
    baseline: i32,
}

impl SeriesHistory {
    pub fn new(width: usize, baseline: i32) -> Self {
        Self { rows: vec![baseline; width], baseline }
    }

    /// Number of columns, always the plot width.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    /// True while every column still sits on the baseline.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&r| r == self.baseline)
    }

    #[inline]
    pub fn baseline(&self) -> i32 {
        self.baseline
    }

    /// Stored row at `col`; the baseline when nothing was plotted there.
    #[inline]
    pub fn row(&self, col: usize) -> i32 {
        self.rows[col]
    }

    #[inline]
    pub fn is_plotted(&self, col: usize) -> bool {
        self.rows[col] != self.baseline
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: i32) {
        self.rows[col] = row;
    }

    pub fn rows(&self) -> &[i32] {
        &self.rows
    }

    /// Move every cell one column left. The vacated last column returns to baseline.
    pub fn shift_left(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.rows.copy_within(1.., 0);
        if let Some(last) = self.rows.last_mut() {
            *last = self.baseline;
        }
    }

    pub fn reset(&mut self) {
        self.rows.fill(self.baseline);
    }

    /// Adjacent column pairs `(col, row_a, row_b)` where both ends are plotted.
    /// `col` is the left column of the pair.
    pub fn segments(&self) -> impl Iterator<Item = (usize, i32, i32)> + '_ {
        let base = self.baseline;
        self.rows
            .windows(2)
            .enumerate()
            .filter(move |(_, w)| w[0] != base && w[1] != base)
            .map(|(col, w)| (col, w[0], w[1]))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferState {
    /// Every cell holds the baseline.
    Empty,
    /// Cursor still short of the last column.
    Filling,
    /// Cursor on the last column.
    Full,
}

/// How the cursor moved after [`ScrollBuffer::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// Ran off the right edge: histories cleared, cursor back at 0.
    Wrapped,
    /// Ran off the right edge: histories shifted left, cursor pinned at the last column.
    Scrolled,
}

/// What happens when the cursor runs off the right edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdvancePolicy {
    /// Clear everything and restart at column 0.
    Wrap,
    /// Shift history one column left and keep plotting at the right edge.
    #[default]
    Scroll,
}

/// Histories for every series of one chart plus their shared cursor.
#[derive(Clone, Debug)]
pub struct ScrollBuffer {
    series: Vec<SeriesHistory>,
    cursor: usize,
    width: usize,
}

impl ScrollBuffer {
    /// Fails fast when the series count or width exceed the fixed capacity.
    pub fn new(series: usize, width: u32, baseline: i32) -> Result<Self> {
        if series == 0 {
            return Err(ChartError::NoSeries);
        }
        if series > MAX_SERIES {
            return Err(ChartError::TooManySeries { requested: series, max: MAX_SERIES });
        }
        if width > MAX_COLUMNS {
            return Err(ChartError::PlotTooWide { width, max: MAX_COLUMNS });
        }
        if width == 0 {
            return Err(ChartError::DegenerateGeometry { width: 0, height: 0 });
        }
        let width = width as usize;
        Ok(Self {
            series: (0..series).map(|_| SeriesHistory::new(width, baseline)).collect(),
            cursor: 0,
            width,
        })
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn history(&self, series: usize) -> Option<&SeriesHistory> {
        self.series.get(series)
    }

    pub fn histories(&self) -> &[SeriesHistory] {
        &self.series
    }

    pub fn state(&self) -> BufferState {
        if self.cursor + 1 >= self.width {
            BufferState::Full
        } else if self.cursor == 0 && self.series.iter().all(SeriesHistory::is_blank) {
            BufferState::Empty
        } else {
            BufferState::Filling
        }
    }

    /// Store `row` at the cursor for `series`.
    ///
    /// Returns the row stored one column to the left (the start of the
    /// connecting segment) when the cursor is past column 0, `None`
    /// otherwise or when `series` is out of range.
    pub fn store(&mut self, series: usize, row: i32) -> Option<Option<i32>> {
        let cursor = self.cursor;
        let history = self.series.get_mut(series)?;
        let previous = (cursor > 0).then(|| history.row(cursor - 1));
        history.set(cursor, row);
        Some(previous)
    }

    /// Step the cursor one column right, applying `policy` at the edge.
    pub fn advance(&mut self, policy: AdvancePolicy) -> Advance {
        self.cursor += 1;
        if self.cursor < self.width {
            return Advance::Moved;
        }
        match policy {
            AdvancePolicy::Wrap => {
                self.reset();
                Advance::Wrapped
            }
            AdvancePolicy::Scroll => {
                for h in &mut self.series {
                    h.shift_left();
                }
                self.cursor = self.width - 1;
                Advance::Scrolled
            }
        }
    }

    /// Back to `Empty`: all cells baseline, cursor at 0.
    pub fn reset(&mut self) {
        for h in &mut self.series {
            h.reset();
        }
        self.cursor = 0;
    }
}
