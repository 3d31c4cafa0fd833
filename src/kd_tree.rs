//! 2-d tree over points with alternating splitting axes.
//!
//! Nodes live in a flat arena addressed by index. The root is always the
//! first node, and a node's children are appended after it, so links only
//! ever point from parent to child and the whole tree drops as a single
//! buffer.

use crate::geometry::Point;

/// Coordinate a node compares on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Split by x; the splitting line is vertical.
    X,
    /// Split by y; the splitting line is horizontal.
    Y,
}

impl Axis {
    /// Axis used by the children of a node splitting on `self`.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Axis of a node at `depth` (root depth 0 compares by x).
    #[inline]
    pub fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }
}

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// One stored point.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) axis: Axis,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl Node {
    fn new(point: Point, axis: Axis) -> Self {
        Node { point, axis, left: None, right: None }
    }

    /// Side a point falls on; ties go right.
    #[inline]
    pub(crate) fn side_of(&self, p: &Point) -> Side {
        if p.coord(self.axis) < self.point.coord(self.axis) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Outcome of descending the tree towards a point.
enum Slot {
    /// The point is stored at this node.
    Occupied(usize),
    /// The point is absent; it belongs in this empty child slot.
    Vacant { parent: usize, side: Side },
    /// The tree has no root.
    Root,
}

/// 2-d tree supporting insertion, membership, range and nearest queries.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree = KdTree::new();
/// let _ = tree.insert(Point::new(0.5, 0.5).unwrap());
/// let _ = tree.insert(Point::new(0.2, 0.8).unwrap());
/// let _ = tree.insert(Point::new(0.8, 0.2).unwrap());
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&Point::new(0.2, 0.8).unwrap()));
///
/// let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
/// assert_eq!(tree.range(&rect), vec![Point::new(0.5, 0.5).unwrap()]);
///
/// let query = Point::new(0.25, 0.75).unwrap();
/// assert_eq!(tree.nearest(&query), Some(Point::new(0.2, 0.8).unwrap()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdTree {
    /// Node arena; index 0 is the root when non-empty
    pub(crate) nodes: Vec<Node>,
}

impl KdTree {
    /// Creates a new empty tree
    pub fn new() -> Self {
        KdTree::with_capacity(0)
    }

    /// Creates a new empty tree with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        KdTree { nodes: Vec::with_capacity(capacity) }
    }

    /// Returns the number of stored points
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds `p` unless an equal point is already stored.
    ///
    /// Returns `true` if the point was new. A duplicate leaves the tree
    /// untouched.
    pub fn insert(&mut self, p: Point) -> bool {
        match self.locate(&p) {
            Slot::Occupied(_) => {
                tracing::trace!(point = %p, "point already stored, skipping insert");
                false
            }
            Slot::Root => {
                self.nodes.push(Node::new(p, Axis::X));
                true
            }
            Slot::Vacant { parent, side } => {
                let index = self.nodes.len();
                let axis = self.nodes[parent].axis.flip();
                self.nodes.push(Node::new(p, axis));
                let parent = &mut self.nodes[parent];
                match side {
                    Side::Left => parent.left = Some(index),
                    Side::Right => parent.right = Some(index),
                }
                true
            }
        }
    }

    /// Returns whether a point equal to `p` is stored.
    pub fn contains(&self, p: &Point) -> bool {
        matches!(self.locate(p), Slot::Occupied(_))
    }

    /// Iterates over the stored points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|node| node.point)
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut height = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    /// Root node index, if any
    #[inline]
    pub(crate) fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() { None } else { Some(0) }
    }

    /// Walks from the root towards `p` using the tie-to-right rule, stopping
    /// at the first node holding `p` or at the empty slot where it belongs.
    fn locate(&self, p: &Point) -> Slot {
        let Some(mut current) = self.root() else {
            return Slot::Root;
        };
        loop {
            let node = &self.nodes[current];
            if node.point == *p {
                return Slot::Occupied(current);
            }
            let side = node.side_of(p);
            match node.child(side) {
                Some(child) => current = child,
                None => return Slot::Vacant { parent: current, side },
            }
        }
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            let _ = self.insert(p);
        }
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = KdTree::new();
        tree.extend(iter);
        tree
    }
}
