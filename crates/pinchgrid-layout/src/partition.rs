//! Weight normalization.
//!
//! A weight array such as `[1, 2, 3]` becomes a [`Partition`] of the unit
//! interval: `[0, 1/6)`, `[1/6, 1/2)`, `[1/2, 1)`. Cell geometry is later
//! obtained by scaling these fractions by the container extent, so the
//! partition is independent of any concrete size and only has to be rebuilt
//! when the weights themselves change.
//!
//! # Invariants
//!
//! 1. The first range starts at exactly `0.0` and the last ends at exactly
//!    `1.0`.
//! 2. Ranges are contiguous: every `end` is the next range's `start`.
//! 3. Bounds are monotonically non-decreasing and never leave `[0, 1]`.

use std::fmt;

use crate::error::WeightsError;

/// Grid axis a weight array applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Columns,
    Rows,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns => f.write_str("column"),
            Self::Rows => f.write_str("row"),
        }
    }
}

/// Half-open fractional interval `[start, end)` inside the unit interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalRange {
    pub start: f64,
    pub end: f64,
}

impl FractionalRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// `start <= fraction < end`.
    #[inline]
    pub fn contains(&self, fraction: f64) -> bool {
        fraction >= self.start && fraction < self.end
    }

    /// Share of the unit interval covered by this range.
    #[inline]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Check that `weights` is non-empty, finite, strictly positive and has a
/// finite total.
pub fn validate_weights(weights: &[f64]) -> Result<(), WeightsError> {
    if weights.is_empty() {
        return Err(WeightsError::Empty);
    }
    let mut total = 0.0;
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(WeightsError::NonFinite { index, value });
        }
        if value <= 0.0 {
            return Err(WeightsError::NonPositive { index, value });
        }
        total += value;
    }
    if !total.is_finite() {
        return Err(WeightsError::SumOverflow);
    }
    Ok(())
}

/// Ordered, contiguous partition of `[0, 1)`, one range per column or row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Partition {
    ranges: Vec<FractionalRange>,
}

impl Partition {
    /// Normalize `weights` into a partition.
    ///
    /// Each range is `weight / sum(weights)` wide, laid out in input order.
    /// The result depends only on the values and their order.
    pub fn from_weights(weights: &[f64]) -> Result<Self, WeightsError> {
        validate_weights(weights)?;
        Ok(Self::from_validated(weights))
    }

    pub(crate) fn from_validated(weights: &[f64]) -> Self {
        let total: f64 = weights.iter().sum();
        let last = weights.len() - 1;

        let mut start = 0.0;
        let ranges = weights
            .iter()
            .enumerate()
            .map(|(index, weight)| {
                // Pin the final edge so rounding can't leave a sliver at 1.0.
                let end = if index == last {
                    1.0
                } else {
                    (start + weight / total).min(1.0)
                };
                let range = FractionalRange::new(start, end);
                start = end;
                range
            })
            .collect();

        Self { ranges }
    }

    /// Number of ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True for the default (unconfigured) partition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Range at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<FractionalRange> {
        self.ranges.get(index).copied()
    }

    /// All ranges in order.
    #[inline]
    pub fn as_slice(&self) -> &[FractionalRange] {
        &self.ranges
    }

    /// Iterate ranges in order.
    pub fn iter(&self) -> impl Iterator<Item = FractionalRange> + '_ {
        self.ranges.iter().copied()
    }

    /// Index of the first range containing `fraction`.
    pub fn first_containing(&self, fraction: f64) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(fraction))
    }

    /// Index of the last range containing `fraction`.
    pub fn last_containing(&self, fraction: f64) -> Option<usize> {
        self.ranges.iter().rposition(|r| r.contains(fraction))
    }

    /// Point lookup in O(log n).
    ///
    /// Agrees with [`Partition::first_containing`]: ranges are disjoint, so at
    /// most one of them contains any fraction.
    pub fn index_of(&self, fraction: f64) -> Option<usize> {
        let index = self.ranges.partition_point(|r| r.end <= fraction);
        self.ranges
            .get(index)
            .filter(|r| r.contains(fraction))
            .map(|_| index)
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a FractionalRange;
    type IntoIter = std::slice::Iter<'a, FractionalRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
