//! Error types for grid configuration.
//!
//! Only weight-setting operations fail. Degenerate containers, out-of-range
//! coordinates and empty query rectangles are ordinary states of a UI
//! lifecycle and surface as `None`, never as errors.

use std::fmt;

use crate::partition::Axis;

/// Why a weight array was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightsError {
    /// The array had no elements.
    Empty,
    /// An element was zero or negative.
    NonPositive { index: usize, value: f64 },
    /// An element was NaN or infinite.
    NonFinite { index: usize, value: f64 },
    /// Every element was valid but their sum overflowed to infinity.
    SumOverflow,
    /// Clamp bounds whose minimum exceeds their maximum.
    InvertedBounds { min: f64, max: f64 },
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "weights must contain at least one element"),
            Self::NonPositive { index, value } => {
                write!(f, "weight {index} is {value}, expected a positive number")
            }
            Self::NonFinite { index, value } => {
                write!(f, "weight {index} is {value}, expected a finite number")
            }
            Self::SumOverflow => write!(f, "sum of weights is not finite"),
            Self::InvertedBounds { min, max } => {
                write!(f, "minimum weight {min} exceeds maximum weight {max}")
            }
        }
    }
}

impl std::error::Error for WeightsError {}

/// Errors reported by [`GridLayout`](crate::GridLayout) mutators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    /// A weight array (or pinch factor) for `axis` was rejected. The layout is
    /// left exactly as it was before the call.
    InvalidArgument { axis: Axis, cause: WeightsError },
}

impl GridError {
    /// Axis whose input was rejected.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        match self {
            Self::InvalidArgument { axis, .. } => *axis,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { axis, cause } => {
                write!(f, "invalid {axis} weights: {cause}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument { cause, .. } => Some(cause),
        }
    }
}
