//! Range and nearest-neighbor queries for [`KdTree`].
//!
//! Both traversals run on an explicit stack rather than the call stack, so a
//! tree built from sorted input (height close to its size) is as safe to
//! query as a balanced one. The visiting order is the one a recursive
//! pre-order walk would produce.

use crate::geometry::{Distance, Point, Rect};
use crate::kd_tree::{KdTree, Side};

impl KdTree {
    /// Returns every stored point inside or on the boundary of `rect`.
    ///
    /// The order of the returned points is unspecified.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let tree: KdTree = [(0.1, 0.1), (0.5, 0.5), (0.9, 0.9)]
    ///     .into_iter()
    ///     .map(|xy| Point::try_from(xy).unwrap())
    ///     .collect();
    ///
    /// let found = tree.range(&Rect::new(0.0, 0.0, 0.5, 0.5).unwrap());
    /// assert_eq!(found.len(), 2);
    /// ```
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut results = Vec::new();
        self.query_range(rect, &mut results);
        results
    }

    /// Appends every stored point inside or on the boundary of `rect` to `results`.
    ///
    /// The buffer is not cleared first, so it can be reused across queries.
    pub fn query_range(&self, rect: &Rect, results: &mut Vec<Point>) {
        let visited = self.range_visit(rect, results);
        tracing::trace!(rect = %rect, visited, stored = self.len(), "range query");
    }

    /// Returns the stored point closest to `p`, or `None` when the tree is empty.
    ///
    /// When several points are equally close, the first one met in
    /// near-side-first order wins.
    pub fn nearest(&self, p: &Point) -> Option<Point> {
        let (best, visited) = self.nearest_visit(p)?;
        tracing::trace!(query = %p, nearest = %best, visited, stored = self.len(), "nearest query");
        Some(best)
    }

    /// Range search core; returns the number of nodes examined.
    ///
    /// A node's left subtree holds only coordinates strictly below the
    /// node's on its axis, the right subtree coordinates at or above it.
    pub(crate) fn range_visit(&self, rect: &Rect, results: &mut Vec<Point>) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let mut visited = 0;
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            visited += 1;
            let node = &self.nodes[index];
            if rect.contains(&node.point) {
                results.push(node.point);
            }
            let split = node.point.coord(node.axis);
            // right pushed first so the left subtree is examined first
            if let Some(right) = node.right {
                if split <= rect.max(node.axis) {
                    stack.push(right);
                }
            }
            if let Some(left) = node.left {
                if split >= rect.min(node.axis) {
                    stack.push(left);
                }
            }
        }
        visited
    }

    /// Nearest search core; returns the best point and the number of nodes examined.
    ///
    /// A far child's stack entry carries the distance from `p` to the parent's
    /// splitting line. It is checked against the best distance when the entry
    /// is popped, so a far child is tested only after the whole near subtree
    /// has tightened the bound. Near children carry no bound.
    pub(crate) fn nearest_visit(&self, p: &Point) -> Option<(Point, usize)> {
        let root = self.root()?;
        let mut best = self.nodes[root].point;
        let mut best_dist = best.distance_key(p);

        let mut visited = 0;
        let mut stack: Vec<(usize, Option<Distance>)> = vec![(root, None)];
        while let Some((index, gap)) = stack.pop() {
            if gap.is_some_and(|gap| gap > best_dist) {
                continue;
            }
            visited += 1;
            let node = &self.nodes[index];

            let dist = node.point.distance_key(p);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let (near, far) = match node.side_of(p) {
                Side::Left => (node.left, node.right),
                Side::Right => (node.right, node.left),
            };
            if let Some(far) = far {
                let gap = Distance::along_axis(p.coord(node.axis), node.point.coord(node.axis));
                stack.push((far, Some(gap)));
            }
            if let Some(near) = near {
                stack.push((near, None));
            }
        }
        Some((best, visited))
    }
}
