#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    #[test]
    fn test_three_point_walkthrough() {
        let mut tree = KdTree::new();

        let _ = tree.insert(Point::new(0.5, 0.5).unwrap()); // root, splits on x
        let _ = tree.insert(Point::new(0.2, 0.8).unwrap()); // left of root, splits on y
        let _ = tree.insert(Point::new(0.8, 0.2).unwrap()); // right of root, splits on y

        assert_eq!(tree.len(), 3);
        assert!(tree.contains(&Point::new(0.2, 0.8).unwrap()));
        assert!(!tree.contains(&Point::new(0.9, 0.9).unwrap()));

        let rect = Rect::new(0.0, 0.0, 0.6, 0.6).unwrap();
        assert_eq!(tree.range(&rect), vec![Point::new(0.5, 0.5).unwrap()]);

        let query = Point::new(0.25, 0.75).unwrap();
        assert_eq!(tree.nearest(&query), Some(Point::new(0.2, 0.8).unwrap()));
    }

    #[test]
    fn test_duplicate_walkthrough() {
        let mut tree = KdTree::new();
        let p = Point::new(0.3, 0.3).unwrap();
        assert!(tree.insert(p));
        assert!(!tree.insert(p));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_invalid_arguments_are_rejected_before_reaching_the_tree() {
        let err = Point::new(f64::NAN, 0.5).unwrap_err();
        assert!(matches!(err, KdTreeError::InvalidArgument(_)));
        assert!(err.to_string().starts_with("Invalid argument"));

        let err = Rect::new(0.6, 0.0, 0.0, 0.6).unwrap_err();
        assert!(matches!(err, KdTreeError::InvalidArgument(_)));
    }

    #[test]
    fn test_render_after_queries() {
        let tree: KdTree = [(0.5, 0.5), (0.2, 0.8), (0.8, 0.2)]
            .into_iter()
            .map(|xy| Point::try_from(xy).unwrap())
            .collect();
        let svg = tree.render_svg(&RenderConfig::default()).unwrap();
        assert_eq!(svg.matches("<circle ").count(), tree.len());
    }
}
