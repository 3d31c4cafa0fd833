//! # kdtree2d - 2-d tree for planar point queries
//!
//! A Rust library providing a 2-d tree (a k-d tree with k = 2) over points in
//! the plane, answering membership, axis-aligned rectangle range and
//! nearest-neighbor queries.
//!
//! ## Features
//!
//! - **Incremental**: points are inserted one at a time, no build step
//! - **Set semantics**: inserting a point that is already stored is a no-op
//! - **Pruned range search**: subtrees whose half-plane misses the rectangle are skipped
//! - **Pruned nearest search**: the near side is searched first, the far side only
//!   when its splitting line is closer than the best point found
//! - **Stack safe**: traversals use an explicit stack, so degenerate trees built
//!   from sorted input are fine
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! let mut tree = KdTree::new();
//! let _ = tree.insert(Point::new(0.5, 0.5).unwrap());
//! let _ = tree.insert(Point::new(0.2, 0.8).unwrap());
//! let _ = tree.insert(Point::new(0.8, 0.2).unwrap());
//! let _ = tree.insert(Point::new(0.8, 0.2).unwrap()); // duplicate, ignored
//!
//! assert_eq!(tree.len(), 3);
//!
//! // Points inside or on the boundary of a rectangle (min_x, min_y, max_x, max_y)
//! let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
//! assert_eq!(tree.range(&rect), vec![Point::new(0.5, 0.5).unwrap()]);
//!
//! // Closest stored point
//! let query = Point::new(0.25, 0.75).unwrap();
//! assert_eq!(tree.nearest(&query), Some(Point::new(0.2, 0.8).unwrap()));
//! ```
//!
//! ## How It Works
//!
//! Every node stores one point and splits the plane with a line through it:
//! vertical (compare by x) at even depths, horizontal (compare by y) at odd
//! depths, starting with x at the root. A point strictly below the node's
//! coordinate goes left, anything else (ties included) goes right. Queries
//! use this ordering to rule out whole subtrees.

pub mod error;
pub mod geometry;
pub mod kd_tree;
pub mod point_set;
pub mod prelude;
mod queries;
pub mod render;

#[cfg(test)]
mod comparison_tests;
#[cfg(test)]
mod integration_test;

pub use error::{KdTreeError, Result};
pub use geometry::{Point, Rect};
pub use kd_tree::{Axis, KdTree};
pub use render::{RenderConfig, Split};
