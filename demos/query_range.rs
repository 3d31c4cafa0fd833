//! List the stored points inside a rectangle.
use kdtree2d::prelude::*;

fn main() -> Result<(), KdTreeError> {
    let mut tree = KdTree::new();
    for (x, y) in [(0.1, 0.1), (0.3, 0.7), (0.5, 0.5), (0.6, 0.2), (0.9, 0.9)] {
        let _ = tree.insert(Point::new(x, y)?);
    }

    let rect = Rect::new(0.0, 0.0, 0.6, 0.6)?;
    let mut found = tree.range(&rect);
    found.sort_by(|a, b| a.x().total_cmp(&b.x()));
    println!("{} points in {rect}:", found.len());
    for p in found {
        println!("  {p}");
    }
    Ok(())
}
