//! Clamped weight scaling for pinch gestures.
//!
//! The host turns a gesture into a multiplicative factor however it likes;
//! this module only guarantees the scaled weight stays inside configured
//! bounds, so repeated pinches can't collapse a column to nothing or let it
//! swallow the grid.

use crate::error::WeightsError;

/// Clamp `value` into `[minimum, maximum]`.
///
/// Works for any `PartialOrd`; a NaN `value` is returned unchanged.
pub fn clamp<T: PartialOrd>(value: T, minimum: T, maximum: T) -> T {
    if value > maximum {
        maximum
    } else if value < minimum {
        minimum
    } else {
        value
    }
}

/// Bounds a pinched weight is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBounds {
    pub min: f64,
    pub max: f64,
}

impl PinchBounds {
    /// Smallest weight a pinch can shrink a track to by default.
    pub const DEFAULT_MIN: f64 = 0.5;
    /// Largest weight a pinch can grow a track to by default.
    pub const DEFAULT_MAX: f64 = 2.0;

    /// Create new bounds.
    ///
    /// Fails unless `0 < min <= max` and both are finite, since every clamped
    /// weight must itself be a valid weight.
    pub fn new(min: f64, max: f64) -> Result<Self, WeightsError> {
        for (index, value) in [min, max].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { index, value });
            }
            if value <= 0.0 {
                return Err(WeightsError::NonPositive { index, value });
            }
        }
        if min > max {
            return Err(WeightsError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// `weight * factor`, clamped into the bounds.
    #[must_use]
    pub fn scale(&self, weight: f64, factor: f64) -> f64 {
        clamp(weight * factor, self.min, self.max)
    }
}

impl Default for PinchBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
