//! Point and rectangle value types.

use std::fmt;

use crate::error::{KdTreeError, Result};
use crate::kd_tree::Axis;

/// Immutable point in the plane with finite coordinates.
///
/// Construction rejects NaN and infinite coordinates and folds `-0.0` into
/// `0.0`, so two points compare equal exactly when their coordinates do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    ///
    /// # Errors
    /// Returns [`KdTreeError::InvalidArgument`] if either coordinate is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::Point;
    ///
    /// let p = Point::new(0.5, 0.25).unwrap();
    /// assert_eq!(p.x(), 0.5);
    /// assert!(Point::new(f64::NAN, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(KdTreeError::InvalidArgument(format!(
                "point coordinates must be finite, got ({x}, {y})"
            )));
        }
        // -0.0 + 0.0 == +0.0; every other value is unchanged
        Ok(Point { x: x + 0.0, y: y + 0.0 })
    }

    /// X coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate along the given splitting axis.
    #[inline]
    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Overflows to infinity once the distance exceeds about `1e154`; use
    /// [`Point::distance_to`] to compare points that far apart.
    #[inline]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    ///
    /// Exact up to rounding for any pair of finite points; infinite only when
    /// the true distance exceeds `f64::MAX`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_key(other).to_f64()
    }

    /// Ordered distance to `other` that stays comparable for any pair of finite points.
    #[inline]
    pub(crate) fn distance_key(&self, other: &Point) -> Distance {
        Distance::between(self.x, self.y, other.x, other.y)
    }
}

/// Comparison key for Euclidean distances.
///
/// Distances whose square fits in an `f64` are kept as that square. Larger
/// ones are kept as the length of the half-scaled difference, which cannot
/// overflow for finite inputs, and order above every squared one. The derived
/// ordering compares `overflowed` first.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct Distance {
    overflowed: bool,
    magnitude: f64,
}

impl Distance {
    /// Distance from `(ax, ay)` to `(bx, by)`.
    pub(crate) fn between(ax: f64, ay: f64, bx: f64, by: f64) -> Self {
        let dx = ax - bx;
        let dy = ay - by;
        let squared = dx * dx + dy * dy;
        if squared.is_finite() {
            return Self { overflowed: false, magnitude: squared };
        }
        let half_dx = ax / 2.0 - bx / 2.0;
        let half_dy = ay / 2.0 - by / 2.0;
        Self { overflowed: true, magnitude: half_dx.hypot(half_dy) }
    }

    /// Distance between two coordinates on the same axis.
    #[inline]
    pub(crate) fn along_axis(a: f64, b: f64) -> Self {
        Self::between(a, 0.0, b, 0.0)
    }

    /// Plain Euclidean distance.
    pub(crate) fn to_f64(self) -> f64 {
        if self.overflowed {
            self.magnitude * 2.0
        } else {
            self.magnitude.sqrt()
        }
    }
}

impl TryFrom<(f64, f64)> for Point {
    type Error = KdTreeError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Closed axis-aligned rectangle: minX, minY, maxX, maxY
///
/// Bounds may be infinite but never NaN, and each minimum is at most the
/// matching maximum. Points on the boundary are inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    /// Creates the rectangle `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// # Errors
    /// Returns [`KdTreeError::InvalidArgument`] if a bound is NaN or a minimum
    /// exceeds its maximum.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
    /// assert!(rect.contains(&Point::new(0.6, 0.0).unwrap()));
    /// assert!(Rect::new(1.0, 0.0, 0.0, 1.0).is_err());
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if min_x.is_nan() || min_y.is_nan() || max_x.is_nan() || max_y.is_nan() {
            return Err(KdTreeError::InvalidArgument(format!(
                "rectangle bounds must not be NaN, got ({min_x}, {min_y}, {max_x}, {max_y})"
            )));
        }
        if min_x > max_x {
            return Err(KdTreeError::InvalidArgument(format!(
                "rectangle min_x {min_x} exceeds max_x {max_x}"
            )));
        }
        if min_y > max_y {
            return Err(KdTreeError::InvalidArgument(format!(
                "rectangle min_y {min_y} exceeds max_y {max_y}"
            )));
        }
        Ok(Rect { min_x, min_y, max_x, max_y })
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub fn unit() -> Self {
        Rect { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 }
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Bottom edge.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Top edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Lower bound along `axis`.
    #[inline]
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.min_x,
            Axis::Y => self.min_y,
        }
    }

    /// Upper bound along `axis`.
    #[inline]
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.max_x,
            Axis::Y => self.max_y,
        }
    }

    /// Extent along x, `max_x - min_x`.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y, `max_y - min_y`.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed inclusion test on all four sides.
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Copy of this rectangle with the upper bound along `axis` lowered to `value`.
    pub(crate) fn with_max(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Rect { max_x: value, ..self },
            Axis::Y => Rect { max_y: value, ..self },
        }
    }

    /// Copy of this rectangle with the lower bound along `axis` raised to `value`.
    pub(crate) fn with_min(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Rect { min_x: value, ..self },
            Axis::Y => Rect { min_y: value, ..self },
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.min_x, self.max_x, self.min_y, self.max_y)
    }
}
