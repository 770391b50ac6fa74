#![forbid(unsafe_code)]

//! Proportional grid layout with cached cell geometry.
//!
//! This crate computes frames for a grid whose columns and rows have relative
//! weights, for hosts that resize those weights live (pinch gestures):
//!
//! - [`partition`] - weight arrays normalized into partitions of `[0, 1)`
//! - [`resolve`] - per-cell frames from partitions and a container size
//! - [`cache`] - memoized frames, cleared whenever geometry changes
//! - [`region`] - cells overlapping a viewport rectangle
//! - [`pinch`] - clamped weight scaling
//! - [`LayoutProvider`] - the capability host adapters call into
//!
//! [`GridLayout`] ties them together.
//!
//! ```
//! use pinchgrid_layout::{CellCoordinate, GridLayout, Rect, Size};
//!
//! let mut grid = GridLayout::with_weights(&[1.0, 1.0, 1.0, 1.0], &[1.0, 1.0, 1.0, 1.0])?;
//! grid.set_container_size(Size::new(100.0, 100.0));
//!
//! assert_eq!(
//!     grid.rect_for(CellCoordinate::new(3, 2)),
//!     Some(Rect::new(50.0, 75.0, 25.0, 25.0))
//! );
//!
//! let visible = grid.cells_intersecting(Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert_eq!(visible.map(|cells| cells.len()), Some(16));
//! # Ok::<(), pinchgrid_layout::GridError>(())
//! ```
//!
//! # Threading
//!
//! Everything runs synchronously on the caller's thread. Methods that mutate
//! configuration or populate the cache take `&mut self`; callers sharing a
//! layout across threads supply their own lock.

pub mod cache;
pub mod error;
pub mod partition;
pub mod pinch;
pub mod provider;
pub mod region;
pub mod resolve;

pub use cache::{AttributeCache, CacheStats};
pub use error::{GridError, WeightsError};
pub use partition::{Axis, FractionalRange, Partition};
pub use pinch::{PinchBounds, clamp};
pub use pinchgrid_core::geometry::{Point, Rect, Sides, Size};
pub use provider::LayoutProvider;
pub use region::{AxisSpan, span_for};
pub use resolve::CellCoordinate;

use partition::validate_weights;
use resolve::{locate_cell, resolve_rect};

/// Column and row weights a [`GridLayout`] starts with when none are given.
pub const DEFAULT_WEIGHTS: [f64; 3] = [1.0, 1.0, 1.0];

/// Initial configuration for a [`GridLayout`].
///
/// ```
/// use pinchgrid_layout::{GridConfig, GridLayout, PinchBounds};
///
/// let config = GridConfig::default()
///     .column_weights([2.0, 1.0])
///     .row_weights([1.0, 1.0, 1.0])
///     .pinch_bounds(PinchBounds::new(0.25, 4.0)?);
/// let grid = GridLayout::with_config(config)?;
/// assert_eq!(grid.column_count(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Relative column widths, left to right.
    pub column_weights: Vec<f64>,
    /// Relative row heights, top to bottom.
    pub row_weights: Vec<f64>,
    /// Clamp applied by [`GridLayout::apply_pinch`].
    pub pinch_bounds: PinchBounds,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_weights: DEFAULT_WEIGHTS.to_vec(),
            row_weights: DEFAULT_WEIGHTS.to_vec(),
            pinch_bounds: PinchBounds::default(),
        }
    }
}

impl GridConfig {
    /// Set the column weights.
    #[must_use]
    pub fn column_weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.column_weights = weights.into_iter().collect();
        self
    }

    /// Set the row weights.
    #[must_use]
    pub fn row_weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.row_weights = weights.into_iter().collect();
        self
    }

    /// Set the pinch clamp bounds.
    #[must_use]
    pub fn pinch_bounds(mut self, bounds: PinchBounds) -> Self {
        self.pinch_bounds = bounds;
        self
    }
}

/// Proportional grid layout engine.
///
/// Owns the current weights, their partitions, the container size and the
/// frame cache. Every successful change to weights or container size clears
/// the cache before returning; setting a value equal to the current one is a
/// no-op and keeps cached frames.
#[derive(Debug, Clone)]
pub struct GridLayout {
    config: GridConfig,
    column_weights: Vec<f64>,
    row_weights: Vec<f64>,
    columns: Partition,
    rows: Partition,
    container: Size,
    cache: AttributeCache,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLayout {
    /// A 3×3 grid of equal cells with an empty container.
    pub fn new() -> Self {
        Self::from_checked(GridConfig::default())
    }

    /// Build a layout from `config`, validating both weight arrays.
    pub fn with_config(config: GridConfig) -> Result<Self, GridError> {
        check(Axis::Columns, &config.column_weights)?;
        check(Axis::Rows, &config.row_weights)?;
        Ok(Self::from_checked(config))
    }

    /// Convenience constructor with default pinch bounds.
    pub fn with_weights(column_weights: &[f64], row_weights: &[f64]) -> Result<Self, GridError> {
        Self::with_config(
            GridConfig::default()
                .column_weights(column_weights.iter().copied())
                .row_weights(row_weights.iter().copied()),
        )
    }

    fn from_checked(config: GridConfig) -> Self {
        Self {
            column_weights: config.column_weights.clone(),
            row_weights: config.row_weights.clone(),
            columns: Partition::from_validated(&config.column_weights),
            rows: Partition::from_validated(&config.row_weights),
            container: Size::ZERO,
            cache: AttributeCache::new(),
            config,
        }
    }

    // --- Configuration -----------------------------------------------------

    /// Replace the column weights.
    ///
    /// On error nothing changes. Equal weights are accepted without touching
    /// partitions or cache.
    pub fn set_column_weights(&mut self, weights: &[f64]) -> Result<(), GridError> {
        check(Axis::Columns, weights)?;
        if replace_axis(&mut self.column_weights, &mut self.columns, weights) {
            pinchgrid_core::debug!(axis = %Axis::Columns, count = weights.len(), "weights updated");
            self.invalidate();
        }
        Ok(())
    }

    /// Replace the row weights.
    ///
    /// On error nothing changes. Equal weights are accepted without touching
    /// partitions or cache.
    pub fn set_row_weights(&mut self, weights: &[f64]) -> Result<(), GridError> {
        check(Axis::Rows, weights)?;
        if replace_axis(&mut self.row_weights, &mut self.rows, weights) {
            pinchgrid_core::debug!(axis = %Axis::Rows, count = weights.len(), "weights updated");
            self.invalidate();
        }
        Ok(())
    }

    /// Replace column and row weights together.
    ///
    /// Both arrays are validated before either is applied, so a rejected call
    /// leaves both axes as they were.
    pub fn set_column_and_row_weights(
        &mut self,
        column_weights: &[f64],
        row_weights: &[f64],
    ) -> Result<(), GridError> {
        check(Axis::Columns, column_weights)?;
        check(Axis::Rows, row_weights)?;

        let columns_changed =
            replace_axis(&mut self.column_weights, &mut self.columns, column_weights);
        let rows_changed = replace_axis(&mut self.row_weights, &mut self.rows, row_weights);
        if columns_changed || rows_changed {
            pinchgrid_core::debug!(
                columns = column_weights.len(),
                rows = row_weights.len(),
                columns_changed,
                rows_changed,
                "weights updated"
            );
            self.invalidate();
        }
        Ok(())
    }

    /// Set the container the grid fills.
    ///
    /// A degenerate size is accepted; it simply makes every cell
    /// unrenderable until a usable size arrives. Moving between two
    /// degenerate sizes (including NaN ones) records the new size but keeps
    /// the cache, which can hold nothing while the container is degenerate.
    pub fn set_container_size(&mut self, size: Size) {
        if size == self.container {
            return;
        }
        let was_degenerate = self.container.is_degenerate();
        self.container = size;
        if was_degenerate && size.is_degenerate() {
            return;
        }
        pinchgrid_core::debug!(width = size.width, height = size.height, "container resized");
        self.invalidate();
    }

    /// Derive the container from view `bounds` minus `insets`.
    pub fn prepare(&mut self, bounds: Rect, insets: Sides) {
        self.set_container_size(Size::from_bounds(bounds, insets));
    }

    /// Restore the weights the layout was configured with.
    pub fn reset(&mut self) {
        let columns_changed = replace_axis(
            &mut self.column_weights,
            &mut self.columns,
            &self.config.column_weights,
        );
        let rows_changed = replace_axis(
            &mut self.row_weights,
            &mut self.rows,
            &self.config.row_weights,
        );
        if columns_changed || rows_changed {
            pinchgrid_core::debug!("weights reset to configuration");
            self.invalidate();
        }
    }

    /// Scale the column and row weights of `coordinate` by `factor`.
    ///
    /// Each scaled weight is clamped into the configured [`PinchBounds`] and
    /// both are applied atomically. Returns whether geometry changed; an
    /// out-of-range coordinate changes nothing.
    pub fn apply_pinch(
        &mut self,
        coordinate: CellCoordinate,
        factor: f64,
    ) -> Result<bool, GridError> {
        let bounds = self.config.pinch_bounds;
        let mut column_weights = self.column_weights.clone();
        let mut row_weights = self.row_weights.clone();

        let (Some(column), Some(row)) = (
            column_weights.get_mut(coordinate.column),
            row_weights.get_mut(coordinate.row),
        ) else {
            return Ok(false);
        };
        *column = bounds.scale(*column, factor);
        *row = bounds.scale(*row, factor);

        let generation = self.cache.generation();
        self.set_column_and_row_weights(&column_weights, &row_weights)?;
        Ok(self.cache.generation() != generation)
    }

    /// Drop all cached frames.
    pub fn invalidate(&mut self) {
        self.cache.clear();
        pinchgrid_core::debug!(generation = self.cache.generation(), "layout invalidated");
    }

    // --- Queries -----------------------------------------------------------

    /// Frame of the cell at `coordinate`.
    ///
    /// `None` while the container is degenerate or when the coordinate is
    /// outside the grid. Repeated calls without an intervening change return
    /// the cached frame.
    pub fn rect_for(&mut self, coordinate: CellCoordinate) -> Option<Rect> {
        let columns = &self.columns;
        let rows = &self.rows;
        let size = self.container;
        self.cache
            .get_or_insert_with(coordinate, || resolve_rect(coordinate, columns, rows, size))
    }

    /// Frames of the cells selected by `rect`, rows outer and columns inner.
    ///
    /// See [`region`] for how edges landing on cell boundaries are treated.
    /// `None` means there is no content to intersect (degenerate container or
    /// a rectangle outside it).
    pub fn cells_intersecting(&mut self, rect: Rect) -> Option<Vec<(CellCoordinate, Rect)>> {
        let columns = &self.columns;
        let rows = &self.rows;
        let size = self.container;
        let cache = &mut self.cache;
        region::cells_intersecting(rect, columns, rows, size, |coordinate| {
            cache.get_or_insert_with(coordinate, || resolve_rect(coordinate, columns, rows, size))
        })
    }

    /// Cell under `point`, for mapping a gesture location to a coordinate.
    pub fn cell_at(&self, point: Point) -> Option<CellCoordinate> {
        locate_cell(point, &self.columns, &self.rows, self.container)
    }

    // --- Accessors ---------------------------------------------------------

    /// Current column weights.
    #[must_use]
    pub fn column_weights(&self) -> &[f64] {
        &self.column_weights
    }

    /// Current row weights.
    #[must_use]
    pub fn row_weights(&self) -> &[f64] {
        &self.row_weights
    }

    /// Current column partition.
    #[must_use]
    pub fn column_partition(&self) -> &Partition {
        &self.columns
    }

    /// Current row partition.
    #[must_use]
    pub fn row_partition(&self) -> &Partition {
        &self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Current container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Scrollable content size. The grid exactly fills its container.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.container
    }

    /// Configuration the layout was built from.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Frame cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Number of invalidations so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.cache.generation()
    }
}

impl LayoutProvider for GridLayout {
    fn prepare(&mut self, bounds: Rect, insets: Sides) {
        GridLayout::prepare(self, bounds, insets);
    }

    fn content_size(&self) -> Size {
        GridLayout::content_size(self)
    }

    fn rect_for(&mut self, coordinate: CellCoordinate) -> Option<Rect> {
        GridLayout::rect_for(self, coordinate)
    }

    fn cells_intersecting(&mut self, rect: Rect) -> Option<Vec<(CellCoordinate, Rect)>> {
        GridLayout::cells_intersecting(self, rect)
    }

    fn invalidate(&mut self) {
        GridLayout::invalidate(self);
    }
}

fn check(axis: Axis, weights: &[f64]) -> Result<(), GridError> {
    validate_weights(weights).map_err(|cause| {
        pinchgrid_core::warn!(%axis, error = %cause, "rejected weights");
        GridError::InvalidArgument { axis, cause }
    })
}

/// Install already-validated `new` weights on one axis. Returns false when
/// they equal the current ones.
fn replace_axis(weights: &mut Vec<f64>, partition: &mut Partition, new: &[f64]) -> bool {
    if weights.as_slice() == new {
        return false;
    }
    weights.clear();
    weights.extend_from_slice(new);
    *partition = Partition::from_validated(new);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_by_four() -> GridLayout {
        let mut grid = GridLayout::with_weights(&[1.0; 4], &[1.0; 4]).unwrap();
        grid.set_container_size(Size::new(100.0, 100.0));
        grid
    }

    #[test]
    fn default_is_three_by_three() {
        let grid = GridLayout::default();
        assert_eq!(grid.column_weights(), &DEFAULT_WEIGHTS);
        assert_eq!(grid.row_weights(), &DEFAULT_WEIGHTS);
        assert_eq!((grid.column_count(), grid.row_count()), (3, 3));
        assert_eq!(grid.container_size(), Size::ZERO);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn with_config_rejects_invalid_weights() {
        let err =
            GridLayout::with_config(GridConfig::default().row_weights([1.0, 0.0])).unwrap_err();
        assert_eq!(err.axis(), Axis::Rows);
    }

    #[test]
    fn frames_for_uniform_grid() {
        let mut grid = four_by_four();
        assert_eq!(
            grid.rect_for(CellCoordinate::new(0, 0)),
            Some(Rect::new(0.0, 0.0, 25.0, 25.0))
        );
        assert_eq!(
            grid.rect_for(CellCoordinate::new(3, 2)),
            Some(Rect::new(50.0, 75.0, 25.0, 25.0))
        );
    }

    #[test]
    fn every_cell_of_uniform_grid() {
        let mut grid = four_by_four();
        for row in 0..4 {
            for column in 0..4 {
                let frame = grid.rect_for(CellCoordinate::new(row, column)).unwrap();
                assert!((frame.x - 25.0 * column as f64).abs() < 1e-3);
                assert!((frame.y - 25.0 * row as f64).abs() < 1e-3);
                assert!((frame.width - 25.0).abs() < 1e-3);
                assert!((frame.height - 25.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn repeated_lookup_hits_cache() {
        let mut grid = four_by_four();
        let cell = CellCoordinate::new(3, 2);
        let first = grid.rect_for(cell);
        let second = grid.rect_for(cell);
        assert_eq!(first, second);
        let stats = grid.cache_stats();
        assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
    }

    #[test]
    fn weight_change_discards_cached_frames() {
        let mut grid = GridLayout::new();
        grid.set_container_size(Size::new(100.0, 100.0));
        let cell = CellCoordinate::new(2, 2);
        let before = grid.rect_for(cell);
        grid.set_column_and_row_weights(&[1.0; 4], &[1.0; 4]).unwrap();
        let after = grid.rect_for(cell);
        assert_ne!(before, after);
        assert_eq!(after, Some(Rect::new(50.0, 50.0, 25.0, 25.0)));
    }

    #[test]
    fn container_change_discards_cached_frames() {
        let mut grid = four_by_four();
        let cell = CellCoordinate::new(1, 1);
        let before = grid.rect_for(cell);
        grid.set_container_size(Size::new(200.0, 100.0));
        let after = grid.rect_for(cell);
        assert_eq!(before, Some(Rect::new(25.0, 25.0, 25.0, 25.0)));
        assert_eq!(after, Some(Rect::new(50.0, 25.0, 50.0, 25.0)));
    }

    #[test]
    fn equal_weights_are_a_no_op() {
        let mut grid = four_by_four();
        let _ = grid.rect_for(CellCoordinate::new(0, 0));
        let generation = grid.generation();

        grid.set_column_weights(&[1.0; 4]).unwrap();
        grid.set_row_weights(&[1.0; 4]).unwrap();
        grid.set_column_and_row_weights(&[1.0; 4], &[1.0; 4]).unwrap();
        grid.set_container_size(Size::new(100.0, 100.0));

        assert_eq!(grid.generation(), generation);
        assert_eq!(grid.cache_stats().entries, 1);
    }

    #[test]
    fn rejected_weights_leave_state_untouched() {
        let mut grid = four_by_four();
        let _ = grid.rect_for(CellCoordinate::new(0, 0));
        let columns = grid.column_partition().clone();
        let rows = grid.row_partition().clone();
        let generation = grid.generation();

        assert!(grid.set_column_weights(&[]).is_err());
        assert!(grid.set_row_weights(&[1.0, -1.0, 12.0]).is_err());
        assert!(grid.set_column_and_row_weights(&[1.0, 2.0], &[]).is_err());
        assert!(grid.set_column_and_row_weights(&[], &[1.0, 2.0]).is_err());

        assert_eq!(grid.column_partition(), &columns);
        assert_eq!(grid.row_partition(), &rows);
        assert_eq!(grid.column_weights(), &[1.0; 4]);
        assert_eq!(grid.generation(), generation);
        assert_eq!(grid.cache_stats().entries, 1);
    }

    #[test]
    fn combined_setter_reports_failing_axis() {
        let mut grid = GridLayout::new();
        let err = grid
            .set_column_and_row_weights(&[1.0, 1.0, 1.0], &[1.0, -1.0, 12.0])
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidArgument {
                axis: Axis::Rows,
                cause: WeightsError::NonPositive {
                    index: 1,
                    value: -1.0
                },
            }
        );
    }

    #[test]
    fn combined_setter_changes_only_differing_axis() {
        let mut grid = GridLayout::new();
        let old_columns = grid.column_partition().clone();
        grid.set_column_and_row_weights(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(grid.column_partition(), &old_columns);
        let middle_end = grid.row_partition().get(1).map_or(0.0, |r| r.end);
        assert!((middle_end - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_container_yields_nothing() {
        let mut grid = GridLayout::new();
        assert_eq!(grid.rect_for(CellCoordinate::new(1, 2)), None);
        assert_eq!(grid.cells_intersecting(Rect::new(0.0, 0.0, 10.0, 10.0)), None);
        assert_eq!(grid.cache_stats().entries, 0);
    }

    #[test]
    fn repeated_degenerate_size_keeps_generation() {
        let mut grid = GridLayout::new();
        let nan = Size::new(f64::NAN, f64::NAN);
        grid.set_container_size(nan);
        grid.set_container_size(nan);
        grid.set_container_size(Size::new(0.0, 50.0));
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.container_size(), Size::new(0.0, 50.0));

        grid.set_container_size(Size::new(100.0, 100.0));
        assert_eq!(grid.generation(), 1);
        assert!(grid.rect_for(CellCoordinate::new(0, 0)).is_some());

        grid.set_container_size(nan);
        assert_eq!(grid.generation(), 2);
        assert_eq!(grid.cache_stats().entries, 0);
        grid.set_container_size(nan);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn out_of_grid_coordinate_yields_nothing() {
        let mut grid = GridLayout::new();
        grid.prepare(Rect::new(20.0, 15.0, 200.0, 500.0), Sides::default());
        assert_eq!(grid.rect_for(CellCoordinate::new(3, 3)), None);
    }

    #[test]
    fn prepare_applies_insets() {
        let mut grid = GridLayout::new();
        grid.prepare(
            Rect::new(20.0, 15.0, 200.0, 500.0),
            Sides::new(1.0, 2.0, 3.0, 4.0),
        );
        assert_eq!(grid.container_size(), Size::new(194.0, 496.0));
    }

    #[test]
    fn region_query_goes_through_cache() {
        let mut grid = four_by_four();
        let cells = grid.cells_intersecting(Rect::new(0.0, 0.0, 100.0, 100.0)).unwrap();
        assert_eq!(cells.len(), 16);
        assert_eq!(grid.cache_stats().entries, 16);

        let single = grid.rect_for(CellCoordinate::new(2, 3));
        assert_eq!(grid.cache_stats().hits, 1);
        assert!(cells.contains(&(CellCoordinate::new(2, 3), single.unwrap())));
    }

    #[test]
    fn cell_at_maps_points() {
        let grid = four_by_four();
        assert_eq!(
            grid.cell_at(Point::new(60.0, 10.0)),
            Some(CellCoordinate::new(0, 2))
        );
        assert_eq!(grid.cell_at(Point::new(100.0, 10.0)), None);
    }

    #[test]
    fn pinch_scales_and_clamps() {
        let mut grid = GridLayout::new();
        grid.set_container_size(Size::new(300.0, 300.0));

        assert_eq!(grid.apply_pinch(CellCoordinate::new(0, 1), 1.5), Ok(true));
        assert_eq!(grid.column_weights(), &[1.0, 1.5, 1.0]);
        assert_eq!(grid.row_weights(), &[1.5, 1.0, 1.0]);

        assert_eq!(grid.apply_pinch(CellCoordinate::new(0, 1), 10.0), Ok(true));
        assert_eq!(grid.column_weights(), &[1.0, 2.0, 1.0]);

        // Already at the upper bound: nothing changes.
        assert_eq!(grid.apply_pinch(CellCoordinate::new(0, 1), 3.0), Ok(false));

        assert_eq!(grid.apply_pinch(CellCoordinate::new(2, 2), 0.0), Ok(true));
        assert_eq!(grid.column_weights(), &[1.0, 2.0, 0.5]);
        assert_eq!(grid.row_weights(), &[2.0, 1.0, 0.5]);
    }

    #[test]
    fn pinch_outside_grid_is_ignored() {
        let mut grid = GridLayout::new();
        assert_eq!(grid.apply_pinch(CellCoordinate::new(0, 7), 1.5), Ok(false));
        assert_eq!(grid.column_weights(), &DEFAULT_WEIGHTS);
    }

    #[test]
    fn nan_pinch_is_rejected() {
        let mut grid = GridLayout::new();
        let err = grid.apply_pinch(CellCoordinate::new(1, 1), f64::NAN).unwrap_err();
        assert_eq!(err.axis(), Axis::Columns);
        assert_eq!(grid.column_weights(), &DEFAULT_WEIGHTS);
        assert_eq!(grid.row_weights(), &DEFAULT_WEIGHTS);
    }

    #[test]
    fn reset_restores_configuration() {
        let mut grid = GridLayout::with_weights(&[1.0, 2.0], &[3.0]).unwrap();
        grid.set_column_weights(&[5.0, 5.0, 5.0]).unwrap();
        let generation = grid.generation();
        grid.reset();
        assert_eq!(grid.column_weights(), &[1.0, 2.0]);
        assert_eq!(grid.generation(), generation + 1);
        grid.reset();
        assert_eq!(grid.generation(), generation + 1);
    }

    #[test]
    fn layout_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<GridLayout>();
    }
}
