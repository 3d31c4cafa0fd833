//! Comparison tests between KdTree (2-d tree) and PointSet (linear scan)

#[cfg(test)]
mod tests {
    use crate::point_set::PointSet;
    use crate::{KdTree, Point, Rect};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// Helper to add the same points to both structures
    fn setup(points: &[Point]) -> (KdTree, PointSet) {
        let mut tree = KdTree::with_capacity(points.len());
        let mut set = PointSet::new();
        for &p in points {
            assert_eq!(tree.insert(p), set.insert(p), "insert disagreement on {p}");
        }
        (tree, set)
    }

    fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point> {
        (0..n)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)).unwrap())
            .collect()
    }

    /// Points on a coarse grid, so coordinates repeat and ties are frequent.
    fn grid_points(rng: &mut StdRng, n: usize, cells: u32) -> Vec<Point> {
        (0..n)
            .map(|_| {
                let x = f64::from(rng.random_range(0..=cells)) / f64::from(cells);
                let y = f64::from(rng.random_range(0..=cells)) / f64::from(cells);
                Point::new(x, y).unwrap()
            })
            .collect()
    }

    fn random_rect(rng: &mut StdRng, max_size: f64) -> Rect {
        let min_x = rng.random_range(-0.1..1.0);
        let min_y = rng.random_range(-0.1..1.0);
        let max_x = min_x + rng.random_range(0.0..max_size);
        let max_y = min_y + rng.random_range(0.0..max_size);
        Rect::new(min_x, min_y, max_x, max_y).unwrap()
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| a.x().total_cmp(&b.x()).then(a.y().total_cmp(&b.y())));
        points
    }

    fn assert_range_matches(tree: &KdTree, set: &PointSet, rect: &Rect) {
        assert_eq!(
            sorted(tree.range(rect)),
            sorted(set.range(rect)),
            "range results differ for {rect}"
        );
    }

    fn assert_nearest_matches(tree: &KdTree, set: &PointSet, q: &Point) {
        let found = tree.nearest(q).expect("tree is non-empty");
        let expected = set.nearest(q).expect("set is non-empty");
        assert_eq!(
            found.distance_key(q),
            expected.distance_key(q),
            "nearest to {q}: tree gave {found}, reference gave {expected}"
        );
        assert!(set.contains(&found), "nearest returned a point never inserted");
    }

    #[test]
    fn test_membership_consistency() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = grid_points(&mut rng, 2_000, 40);
        let (tree, set) = setup(&points);

        assert_eq!(tree.len(), set.len(), "duplicate handling differs");
        for q in grid_points(&mut rng, 2_000, 40) {
            assert_eq!(tree.contains(&q), set.contains(&q), "contains({q}) differs");
        }
    }

    #[test]
    fn test_iter_yields_stored_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let points = grid_points(&mut rng, 500, 20);
        let (tree, set) = setup(&points);
        assert_eq!(sorted(tree.iter().collect()), sorted(set.iter().collect()));
    }

    #[test]
    fn test_range_consistency_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, 5_000);
        let (tree, set) = setup(&points);

        for max_size in [0.01, 0.1, 0.5, 1.2] {
            for _ in 0..50 {
                let rect = random_rect(&mut rng, max_size);
                assert_range_matches(&tree, &set, &rect);
            }
        }
    }

    #[test]
    fn test_range_consistency_with_ties() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points = grid_points(&mut rng, 3_000, 16);
        let (tree, set) = setup(&points);

        // rectangles whose edges sit exactly on grid lines
        for _ in 0..300 {
            let a = f64::from(rng.random_range(0..=16)) / 16.0;
            let b = f64::from(rng.random_range(0..=16)) / 16.0;
            let c = f64::from(rng.random_range(0..=16)) / 16.0;
            let d = f64::from(rng.random_range(0..=16)) / 16.0;
            let rect = Rect::new(a.min(b), c.min(d), a.max(b), c.max(d)).unwrap();
            assert_range_matches(&tree, &set, &rect);
        }
    }

    #[test]
    fn test_range_independent_of_insertion_order() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut points = grid_points(&mut rng, 1_000, 25);
        let (first, _) = setup(&points);
        points.shuffle(&mut rng);
        let (second, _) = setup(&points);

        for _ in 0..100 {
            let rect = random_rect(&mut rng, 0.4);
            assert_eq!(sorted(first.range(&rect)), sorted(second.range(&rect)));
        }
    }

    #[test]
    fn test_nearest_consistency_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_points(&mut rng, 5_000);
        let (tree, set) = setup(&points);

        for _ in 0..500 {
            let q = Point::new(rng.random_range(-0.2..1.2), rng.random_range(-0.2..1.2)).unwrap();
            assert_nearest_matches(&tree, &set, &q);
        }
    }

    #[test]
    fn test_nearest_consistency_with_ties() {
        let mut rng = StdRng::seed_from_u64(2024);
        let points = grid_points(&mut rng, 800, 10);
        let (tree, set) = setup(&points);

        // queries on grid points and cell centers are equidistant from several points
        for _ in 0..500 {
            let x = f64::from(rng.random_range(0..=20)) / 20.0;
            let y = f64::from(rng.random_range(0..=20)) / 20.0;
            assert_nearest_matches(&tree, &set, &Point::new(x, y).unwrap());
        }
    }

    #[test]
    fn test_nearest_consistency_small_sets() {
        let mut rng = StdRng::seed_from_u64(5);
        for n in 1..40 {
            let points = random_points(&mut rng, n);
            let (tree, set) = setup(&points);
            for _ in 0..20 {
                let q = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)).unwrap();
                assert_nearest_matches(&tree, &set, &q);
            }
        }
    }

    #[test]
    fn test_nearest_consistency_huge_coordinates() {
        let mut rng = StdRng::seed_from_u64(77);
        // exponents up to 1e300, so most squared distances overflow
        let mut huge = || {
            let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
            sign * rng.random_range(1.0..10.0) * 10f64.powi(rng.random_range(100..=300))
        };
        let points: Vec<Point> = (0..1_000).map(|_| Point::new(huge(), huge()).unwrap()).collect();
        let (tree, set) = setup(&points);

        for _ in 0..300 {
            let q = Point::new(huge(), huge()).unwrap();
            assert_nearest_matches(&tree, &set, &q);
        }
    }

    #[test]
    fn test_empty_consistency() {
        let tree = KdTree::new();
        let set = PointSet::new();
        let q = Point::new(0.5, 0.5).unwrap();
        assert_eq!(tree.nearest(&q), set.nearest(&q));
        assert_eq!(tree.range(&Rect::unit()), set.range(&Rect::unit()));
        assert_eq!(tree.contains(&q), set.contains(&q));
    }
}
