//! Diagnostic rendering of a tree's partition.
//!
//! Each node splits its cell with a vertical (x) or horizontal (y) segment.
//! [`KdTree::splits`] computes those segments and [`KdTree::render_svg`]
//! draws them together with the stored points. This is a debugging aid; the
//! output carries no guarantees beyond being well-formed SVG.

use serde::{Deserialize, Serialize};

use crate::error::{KdTreeError, Result};
use crate::geometry::{Point, Rect};
use crate::kd_tree::{Axis, KdTree};

/// Splitting segment of one node, clipped to the node's cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Split {
    /// Axis the node splits on; `X` gives a vertical segment
    pub axis: Axis,
    /// Point stored at the node
    pub point: Point,
    /// Segment start (lower end)
    pub start: (f64, f64),
    /// Segment end (upper end)
    pub end: (f64, f64),
}

/// Settings for [`KdTree::render_svg`].
///
/// Every field has a default, so a partial JSON or TOML document is enough:
///
/// ```
/// use kdtree2d::RenderConfig;
///
/// let config: RenderConfig = serde_json::from_str(r#"{ "width": 800 }"#).unwrap();
/// assert_eq!(config.width, 800);
/// assert_eq!(config.height, RenderConfig::default().height);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Blank border around the drawing, in pixels
    pub margin: f64,
    /// Point marker radius, in pixels
    pub point_radius: f64,
    /// Drawing region as `[min_x, min_y, max_x, max_y]`
    pub bounds: [f64; 4],
    /// Fill color of point markers
    pub point_color: String,
    /// Color of vertical segments (nodes splitting on x)
    pub x_split_color: String,
    /// Color of horizontal segments (nodes splitting on y)
    pub y_split_color: String,
    /// Stroke color of the bounds frame
    pub frame_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            margin: 16.0,
            point_radius: 3.0,
            bounds: [0.0, 0.0, 1.0, 1.0],
            point_color: "#000000".to_string(),
            x_split_color: "#FF0000".to_string(),
            y_split_color: "#0000FF".to_string(),
            frame_color: "#333333".to_string(),
        }
    }
}

impl RenderConfig {
    /// Drawing region as a rectangle.
    ///
    /// # Errors
    /// Returns [`KdTreeError::InvalidArgument`] unless the bounds form a
    /// finite rectangle with positive width and height.
    pub fn bounds(&self) -> Result<Rect> {
        let [min_x, min_y, max_x, max_y] = self.bounds;
        let rect = Rect::new(min_x, min_y, max_x, max_y)?;
        if !(rect.width().is_finite() && rect.height().is_finite()) {
            return Err(KdTreeError::InvalidArgument(format!(
                "render bounds must be finite, got {rect}"
            )));
        }
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return Err(KdTreeError::InvalidArgument(format!(
                "render bounds must have positive area, got {rect}"
            )));
        }
        Ok(rect)
    }

    /// Checks every setting.
    ///
    /// # Errors
    /// Returns [`KdTreeError::InvalidArgument`] for an empty canvas, a margin
    /// that leaves no room to draw, a negative or non-finite radius, or
    /// invalid bounds.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KdTreeError::InvalidArgument(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let shortest = f64::from(self.width.min(self.height));
        if !(self.margin >= 0.0 && 2.0 * self.margin < shortest) {
            return Err(KdTreeError::InvalidArgument(format!(
                "margin {} leaves no room on a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }
        if !(self.point_radius >= 0.0 && self.point_radius.is_finite()) {
            return Err(KdTreeError::InvalidArgument(format!(
                "point radius must be finite and non-negative, got {}",
                self.point_radius
            )));
        }
        let _ = self.bounds()?;
        Ok(())
    }
}

impl KdTree {
    /// Splitting segments of every node, clipped to `bounds`.
    ///
    /// A node's cell is the part of `bounds` its ancestors leave it; the
    /// segment crosses that cell at the node's coordinate (clamped into the
    /// cell for points outside `bounds`). Segments come out in pre-order.
    pub fn splits(&self, bounds: &Rect) -> Vec<Split> {
        let mut splits = Vec::with_capacity(self.len());
        let Some(root) = self.root() else {
            return splits;
        };
        let mut stack = vec![(root, *bounds)];
        while let Some((index, cell)) = stack.pop() {
            let node = &self.nodes[index];
            let at = node
                .point
                .coord(node.axis)
                .clamp(cell.min(node.axis), cell.max(node.axis));
            let (start, end) = match node.axis {
                Axis::X => ((at, cell.min_y()), (at, cell.max_y())),
                Axis::Y => ((cell.min_x(), at), (cell.max_x(), at)),
            };
            splits.push(Split { axis: node.axis, point: node.point, start, end });

            if let Some(right) = node.right {
                stack.push((right, cell.with_min(node.axis, at)));
            }
            if let Some(left) = node.left {
                stack.push((left, cell.with_max(node.axis, at)));
            }
        }
        splits
    }

    /// Renders the partition and the points inside the configured bounds as SVG.
    ///
    /// # Errors
    /// Returns [`KdTreeError::InvalidArgument`] if `config` fails
    /// [`RenderConfig::validate`].
    pub fn render_svg(&self, config: &RenderConfig) -> Result<String> {
        config.validate()?;
        let bounds = config.bounds()?;

        let width = f64::from(config.width);
        let height = f64::from(config.height);
        let margin = config.margin;
        let plot_width = width - 2.0 * margin;
        let plot_height = height - 2.0 * margin;
        // y grows downwards in SVG
        let to_svg = |x: f64, y: f64| {
            (
                margin + (x - bounds.min_x()) / bounds.width() * plot_width,
                height - margin - (y - bounds.min_y()) / bounds.height() * plot_height,
            )
        };

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
            config.width, config.height, config.width, config.height
        ));

        svg.push_str("  <defs>\n");
        svg.push_str("    <style>\n");
        svg.push_str(&format!(
            "      .frame {{ fill: none; stroke: {}; stroke-width: 2; }}\n",
            config.frame_color
        ));
        svg.push_str(&format!(
            "      .x-split {{ stroke: {}; stroke-width: 1; }}\n",
            config.x_split_color
        ));
        svg.push_str(&format!(
            "      .y-split {{ stroke: {}; stroke-width: 1; }}\n",
            config.y_split_color
        ));
        svg.push_str(&format!("      .point {{ fill: {}; }}\n", config.point_color));
        svg.push_str("    </style>\n");
        svg.push_str("  </defs>\n\n");

        svg.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" class=\"frame\"/>\n\n",
            margin, margin, plot_width, plot_height
        ));

        let splits = self.splits(&bounds);
        svg.push_str("  <g id=\"splits\">\n");
        for split in &splits {
            let (x1, y1) = to_svg(split.start.0, split.start.1);
            let (x2, y2) = to_svg(split.end.0, split.end.1);
            let class = match split.axis {
                Axis::X => "x-split",
                Axis::Y => "y-split",
            };
            svg.push_str(&format!(
                "    <line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" class=\"{class}\"/>\n"
            ));
        }
        svg.push_str("  </g>\n\n");

        let mut drawn = 0usize;
        svg.push_str("  <g id=\"points\">\n");
        for p in self.iter().filter(|p| bounds.contains(p)) {
            let (cx, cy) = to_svg(p.x(), p.y());
            svg.push_str(&format!(
                "    <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" class=\"point\"/>\n",
                config.point_radius
            ));
            drawn += 1;
        }
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");

        tracing::debug!(
            splits = splits.len(),
            points = drawn,
            skipped = self.len() - drawn,
            "rendered tree partition"
        );
        Ok(svg)
    }
}
