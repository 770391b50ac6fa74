//! Attribute cache for resolved cell frames.
//!
//! [`AttributeCache`] memoizes the frame of every cell the host has asked for
//! under the current configuration, keyed by [`CellCoordinate`].
//!
//! # Invalidation
//!
//! There is exactly one invalidation strategy: [`AttributeCache::clear`]
//! drops everything. The engine calls it as the last step of any change to
//! column weights, row weights or container size, so no lookup ever observes
//! a frame computed under a previous configuration. Grid dimensions are small
//! and host-controlled, so there is no capacity bound or eviction.
//!
//! ```
//! use pinchgrid_core::geometry::Rect;
//! use pinchgrid_layout::{AttributeCache, CellCoordinate};
//!
//! let mut cache = AttributeCache::new();
//! let cell = CellCoordinate::new(0, 1);
//!
//! let first = cache.get_or_insert_with(cell, || Some(Rect::new(25.0, 0.0, 25.0, 25.0)));
//! let second = cache.get_or_insert_with(cell, || None);
//! assert_eq!(first, second);
//!
//! cache.clear();
//! assert!(cache.get(cell).is_none());
//! ```

use std::collections::HashMap;

use pinchgrid_core::geometry::Rect;

use crate::resolve::CellCoordinate;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CacheStats {
    /// Number of entries currently in the cache.
    pub entries: usize,
    /// Total cache hits since creation or last reset.
    pub hits: u64,
    /// Total cache misses since creation or last reset.
    pub misses: u64,
    /// Hit rate as a fraction (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Cell frame cache with whole-cache invalidation.
#[derive(Debug, Clone, Default)]
pub struct AttributeCache {
    entries: HashMap<CellCoordinate, Rect>,
    generation: u64,
    hits: u64,
    misses: u64,
}

impl AttributeCache {
    /// Create an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached frame for `coordinate`, without touching statistics.
    #[inline]
    pub fn get(&self, coordinate: CellCoordinate) -> Option<Rect> {
        self.entries.get(&coordinate).copied()
    }

    /// Store `rect` as the frame of `coordinate`, replacing any previous one.
    #[inline]
    pub fn put(&mut self, coordinate: CellCoordinate, rect: Rect) {
        self.entries.insert(coordinate, rect);
    }

    /// Return the cached frame, or compute, store and return a new one.
    ///
    /// A `None` from `compute` is passed through and not cached, so a cell
    /// that is unrenderable now is recomputed on the next request.
    pub fn get_or_insert_with<F>(&mut self, coordinate: CellCoordinate, compute: F) -> Option<Rect>
    where
        F: FnOnce() -> Option<Rect>,
    {
        if let Some(rect) = self.entries.get(&coordinate) {
            self.hits += 1;
            pinchgrid_core::trace!(row = coordinate.row, column = coordinate.column, "cache hit");
            return Some(*rect);
        }

        self.misses += 1;
        pinchgrid_core::trace!(row = coordinate.row, column = coordinate.column, "cache miss");
        let rect = compute()?;
        self.entries.insert(coordinate, rect);
        Some(rect)
    }

    /// Drop every entry and start a new generation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of cached frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times the cache has been cleared.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
            hit_rate: if total > 0 {
                self.hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }

    /// Reset hit/miss counters, keeping entries and generation.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}
