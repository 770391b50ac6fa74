//! Viewport queries: which cells overlap a rectangle.
//!
//! The query clips the rectangle to the content bounds, converts the clipped
//! edges to fractions of the container, and maps each fraction to a partition
//! index per axis. The cells of the resulting index spans are enumerated in
//! row-major order (rows outer, columns inner).
//!
//! # Span policy
//!
//! Per axis the span is `lower..upper`, where
//!
//! - `lower` is the first range containing the lower fraction, clamped to `0`
//!   when no range contains it, and
//! - `upper` is the last range containing the upper fraction, clamped to the
//!   partition length when no range contains it.
//!
//! `upper` is exclusive even though it names the range the upper edge falls
//! into. A query whose far edge lands exactly on a boundary therefore stops
//! before the cell starting there, and one whose far edge ends inside a cell
//! leaves that cell out. Only an edge at or past the end of the content
//! (fraction `1.0`, contained by no range) reaches the last cell.

use std::ops::Range;

use pinchgrid_core::geometry::{Rect, Size};

use crate::partition::Partition;
use crate::resolve::CellCoordinate;

/// Index span selected on one axis, with the clamp that produced each bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSpan {
    /// First index (inclusive).
    pub start: usize,
    /// Last index (exclusive).
    pub end: usize,
    /// `start` fell back to `0` because no range contained the lower fraction.
    pub start_clamped: bool,
    /// `end` fell back to the partition length because no range contained the
    /// upper fraction.
    pub end_clamped: bool,
}

impl AxisSpan {
    /// Indices covered by the span. Empty when `start >= end`.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of indices covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span selects nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select the index span of `partition` between two fractions.
pub fn span_for(partition: &Partition, lower: f64, upper: f64) -> AxisSpan {
    let (start, start_clamped) = match partition.first_containing(lower) {
        Some(index) => (index, false),
        None => (0, true),
    };
    let (end, end_clamped) = match partition.last_containing(upper) {
        Some(index) => (index, false),
        None => (partition.len(), true),
    };
    AxisSpan {
        start,
        end,
        start_clamped,
        end_clamped,
    }
}

/// Frames of every cell selected by `rect`, in row-major order.
///
/// `resolve` maps a coordinate to its frame; the engine passes its cached
/// resolver. Coordinates it cannot resolve are dropped.
///
/// Returns `None` when the container is degenerate or `rect` does not overlap
/// the content, and an empty vector when either partition is empty.
pub fn cells_intersecting<F>(
    rect: Rect,
    columns: &Partition,
    rows: &Partition,
    size: Size,
    mut resolve: F,
) -> Option<Vec<(CellCoordinate, Rect)>>
where
    F: FnMut(CellCoordinate) -> Option<Rect>,
{
    if size.is_degenerate() {
        return None;
    }
    let (left, top, right, bottom) = Rect::from_size(size).overlap_edges(&rect)?;
    if columns.is_empty() || rows.is_empty() {
        return Some(Vec::new());
    }

    let column_span = span_for(columns, left / size.width, right / size.width);
    let row_span = span_for(rows, top / size.height, bottom / size.height);

    let _span = pinchgrid_core::debug_span!(
        "cells_intersecting",
        left,
        top,
        right,
        bottom,
        rows = row_span.len(),
        columns = column_span.len()
    )
    .entered();

    let mut cells = Vec::with_capacity(row_span.len() * column_span.len());
    for row in row_span.indices() {
        for column in column_span.indices() {
            let coordinate = CellCoordinate::new(row, column);
            if let Some(frame) = resolve(coordinate) {
                cells.push((coordinate, frame));
            }
        }
    }
    Some(cells)
}
