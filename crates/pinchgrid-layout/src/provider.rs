//! Host-facing layout capability.
//!
//! A UI toolkit typically asks its layout object for content size, per-item
//! frames and the items inside a viewport from fixed lifecycle hooks. A host
//! adapter implements those hooks by forwarding to a [`LayoutProvider`], so
//! the engine itself never depends on the toolkit.

use pinchgrid_core::geometry::{Rect, Sides, Size};

use crate::resolve::CellCoordinate;

/// Layout queries a host adapter forwards from its framework hooks.
pub trait LayoutProvider {
    /// Update the container from the host's bounds and insets before a pass.
    fn prepare(&mut self, bounds: Rect, insets: Sides);

    /// Total scrollable content size.
    fn content_size(&self) -> Size;

    /// Frame of a single cell.
    fn rect_for(&mut self, coordinate: CellCoordinate) -> Option<Rect>;

    /// Frames of every cell overlapping `rect`.
    fn cells_intersecting(&mut self, rect: Rect) -> Option<Vec<(CellCoordinate, Rect)>>;

    /// Drop any memoized geometry.
    fn invalidate(&mut self);
}
