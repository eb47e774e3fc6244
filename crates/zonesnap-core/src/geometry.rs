#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are viewport pixels as `f64`, origin at the top-left corner.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pointer or touch coordinate in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Errors while constructing geometry from host-supplied numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// A dimension was NaN or infinite.
    NonFinite { width: f64, height: f64 },
    /// A dimension was negative.
    Negative { width: f64, height: f64 },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { width, height } => {
                write!(f, "viewport dimensions must be finite, got {width}x{height}")
            }
            Self::Negative { width, height } => {
                write!(f, "viewport dimensions must be non-negative, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// The live `{width, height}` signal supplied by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport without validation.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a viewport, rejecting non-finite or negative dimensions.
    pub fn try_new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { width, height });
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::Negative { width, height });
        }
        Ok(Self { width, height })
    }

    /// Y coordinate of the horizontal line at half the viewport height.
    #[inline]
    #[must_use]
    pub fn hinge_y(&self) -> f64 {
        self.height / 2.0
    }

    /// The full viewport as a rectangle anchored at the origin.
    #[inline]
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

/// A half-open horizontal interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub start: f64,
    pub end: f64,
}

impl Bounds {
    #[inline]
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Left-closed, right-open membership.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x < self.end
    }
}

/// A rectangle: position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f64,
    /// Top edge (inclusive).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rectangle of the given size centred on `center`.
    #[inline]
    #[must_use]
    pub fn centered_on(center: Position, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Centre point of the rectangle.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
