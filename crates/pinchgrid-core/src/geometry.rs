#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are `f64` container units (points or pixels, whatever the host
//! renders in). The origin is the top-left corner of the container; `x` grows
//! to the right and `y` grows downward.

/// A point in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
///
/// A size with a zero, negative, or non-finite extent is *degenerate*: it
/// describes a container with nothing to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size left over after removing `insets` from `bounds`.
    ///
    /// Each extent saturates at zero when the insets exceed it.
    #[must_use]
    pub fn from_bounds(bounds: Rect, insets: Sides) -> Self {
        bounds.inner(insets).size()
    }

    /// True unless both extents are finite and strictly positive.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite())
    }
}

/// An axis-aligned rectangle for cell frames, content bounds and viewport
/// queries.
///
/// Left and top edges are inclusive, right and bottom edges exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle encloses no area.
    ///
    /// NaN extents count as empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Edges of the overlap with `other` as `(left, top, right, bottom)`.
    ///
    /// Returns `None` when the overlap has no area, when either rectangle is
    /// empty, or when either has a NaN edge. Each returned edge is one of the
    /// inputs' edges, never recomputed as `x + width`.
    pub fn overlap_edges(&self, other: &Rect) -> Option<(f64, f64, f64, f64)> {
        if self.is_unusable() || other.is_unusable() {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        (left < right && top < bottom).then_some((left, top, right, bottom))
    }

    fn is_unusable(&self) -> bool {
        self.is_empty()
            || self.x.is_nan()
            || self.y.is_nan()
            || self.right().is_nan()
            || self.bottom().is_nan()
    }

    /// Create a new rectangle inside the current one with the given insets.
    ///
    /// Width and height saturate at zero.
    pub fn inner(&self, insets: Sides) -> Rect {
        let x = self.x + insets.left;
        let y = self.y + insets.top;
        let width = (self.width - insets.horizontal_sum()).max(0.0);
        let height = (self.height - insets.vertical_sum()).max(0.0);

        Rect::new(x, y, width, height)
    }

    /// Grow (positive) or shrink (negative) the rectangle on every side.
    #[must_use]
    pub fn outset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }
}

/// Per-edge insets (content inset, safe area).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f64) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }

    /// Edge-wise sum, for stacking content insets on top of a safe area.
    #[must_use]
    pub fn combine(self, other: Sides) -> Sides {
        Sides::new(
            self.top + other.top,
            self.right + other.right,
            self.bottom + other.bottom,
            self.left + other.left,
        )
    }
}

impl From<f64> for Sides {
    fn from(val: f64) -> Self {
        Self::all(val)
    }
}

impl From<(f64, f64, f64, f64)> for Sides {
    fn from((top, right, bottom, left): (f64, f64, f64, f64)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
