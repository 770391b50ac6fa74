//! Fraction-to-pixel geometry for single cells.

use std::fmt;

use pinchgrid_core::geometry::{Point, Rect, Size};

use crate::partition::Partition;

/// Grid cell address: `row` indexes the row partition, `column` the column
/// partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellCoordinate {
    pub row: usize,
    pub column: usize,
}

impl CellCoordinate {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for CellCoordinate {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Absolute frame of `coordinate` inside a container of `size`.
///
/// Returns `None` when the container is degenerate or the coordinate lies
/// outside either partition. Extents are `end * extent - start * extent`
/// rather than `(end - start) * extent`, so every edge is one product of a
/// partition bound and never an accumulated sum.
pub fn resolve_rect(
    coordinate: CellCoordinate,
    columns: &Partition,
    rows: &Partition,
    size: Size,
) -> Option<Rect> {
    if size.is_degenerate() {
        return None;
    }
    let column = columns.get(coordinate.column)?;
    let row = rows.get(coordinate.row)?;

    let x = column.start * size.width;
    let y = row.start * size.height;
    let width = column.end * size.width - x;
    let height = row.end * size.height - y;

    Some(Rect::new(x, y, width, height))
}

/// Cell whose frame contains `point`, if any.
pub fn locate_cell(
    point: Point,
    columns: &Partition,
    rows: &Partition,
    size: Size,
) -> Option<CellCoordinate> {
    if size.is_degenerate() || !Rect::from_size(size).contains(point) {
        return None;
    }
    let column = columns.index_of(point.x / size.width)?;
    let row = rows.index_of(point.y / size.height)?;
    Some(CellCoordinate::new(row, column))
}
