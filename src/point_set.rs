//! Brute-force point set (reference implementation)
//!
//! Keeps points in a sorted set and answers range and nearest queries with a
//! linear scan. It exists to check [`KdTree`](crate::KdTree) results against
//! and to give the benches a baseline.

#![doc(hidden)]

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::geometry::{Distance, Point, Rect};

/// Point ordered by y, then x.
///
/// Coordinates are finite with no negative zero, so `total_cmp` agrees with
/// `==` on them.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Ordered(Point);

impl Eq for Ordered {}

impl Ord for Ordered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .y()
            .total_cmp(&other.0.y())
            .then_with(|| self.0.x().total_cmp(&other.0.x()))
    }
}

impl PartialOrd for Ordered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Linear-scan point set with the same query surface as [`KdTree`](crate::KdTree).
///
/// # Examples
/// ```
/// use kdtree2d::point_set::PointSet;
/// use kdtree2d::Point;
///
/// let mut set = PointSet::new();
/// let _ = set.insert(Point::new(0.5, 0.5).unwrap());
/// let _ = set.insert(Point::new(0.5, 0.5).unwrap());
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: BTreeSet<Ordered>,
}

impl PointSet {
    /// Creates a new empty set
    pub fn new() -> Self {
        PointSet { points: BTreeSet::new() }
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no point is stored.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds `p` if absent; returns `true` if it was new.
    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(Ordered(p))
    }

    /// Returns `true` if `p` is stored.
    pub fn contains(&self, p: &Point) -> bool {
        self.points.contains(&Ordered(*p))
    }

    /// Points in ascending (y, x) order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(|ordered| ordered.0)
    }

    /// All points inside or on the boundary of `rect`, in (y, x) order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        self.iter().filter(|p| rect.contains(p)).collect()
    }

    /// Closest point to `p`; the first in (y, x) order wins ties.
    pub fn nearest(&self, p: &Point) -> Option<Point> {
        let mut closest: Option<(Point, Distance)> = None;
        for candidate in self.iter() {
            let dist = candidate.distance_key(p);
            if closest.is_none_or(|(_, best)| dist < best) {
                closest = Some((candidate, dist));
            }
        }
        closest.map(|(point, _)| point)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet { points: iter.into_iter().map(Ordered).collect() }
    }
}
