//! Find the stored point nearest to a query point.
use kdtree2d::prelude::*;

fn main() -> Result<(), KdTreeError> {
    let mut tree = KdTree::with_capacity(3);
    let _ = tree.insert(Point::new(0.5, 0.5)?);
    let _ = tree.insert(Point::new(0.2, 0.8)?);
    let _ = tree.insert(Point::new(0.8, 0.2)?);

    let query = Point::new(0.25, 0.75)?;
    if let Some(p) = tree.nearest(&query) {
        println!("Nearest to {query}: {p} (distance {:.4})", p.distance_to(&query));
    }
    Ok(())
}
