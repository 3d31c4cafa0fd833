//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdtree2d::prelude::*;
//! ```

pub use crate::{Axis, KdTree, KdTreeError, Point, Rect, RenderConfig};
