//! 2-d tree SVG visualizer
//! Inserts random points and writes an SVG showing each node's splitting segment

use std::error::Error;
use std::fs;

use kdtree2d::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn Error>> {
    // Parameter: number of random points to insert
    let num_points = 64;

    // Optional JSON config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => RenderConfig { width: 640, height: 640, ..RenderConfig::default() },
    };

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut tree = KdTree::with_capacity(num_points);
    for _ in 0..num_points {
        let _ = tree.insert(Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0))?);
    }

    let svg = tree.render_svg(&config)?;
    fs::write("kd_tree_splits.svg", svg)?;

    println!("✓ Generated: kd_tree_splits.svg");
    println!("  - Points: {}", tree.len());
    println!("  - Tree height: {}", tree.height());
    Ok(())
}
