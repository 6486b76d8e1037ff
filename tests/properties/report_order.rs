//! Property tests for batch sorting and report views.

use std::cmp::Ordering;

use proptest::prelude::*;

use shapewatch::domain::services::{build_reports, compare_shapes, sort_batch};
use shapewatch::{ReportView, Shape, ShapeKind};

fn shape() -> impl Strategy<Value = Shape> {
    let color = prop_oneof![
        Just("Red"),
        Just("red"),
        Just("Blue"),
        Just("Purple"),
        Just("purple"),
        Just("green"),
    ];
    let size = 0u32..20;
    (0usize..4, size.clone(), size, color).prop_map(|(k, a, b, color)| {
        let (a, b) = (f64::from(a) / 2.0, f64::from(b) / 2.0);
        match ShapeKind::ALL[k] {
            ShapeKind::Circle => Shape::circle(a, color),
            ShapeKind::Rectangle => Shape::rectangle(a, b, color),
            ShapeKind::Square => Shape::square(a, color),
            ShapeKind::Triangle => Shape::triangle(a, b, color),
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A sorted batch is ordered by area, then by color.
    #[test]
    fn property_sorted_batch_is_ordered(mut shapes in proptest::collection::vec(shape(), 0..40)) {
        sort_batch(&mut shapes);
        for pair in shapes.windows(2) {
            prop_assert_ne!(compare_shapes(&pair[0], &pair[1]), Ordering::Greater);
            prop_assert!(pair[0].area() <= pair[1].area());
        }
    }

    /// PROPERTY: Shapes that compare equal keep their input order.
    #[test]
    fn property_sort_is_stable(shapes in proptest::collection::vec(shape(), 0..40)) {
        let mut sorted = shapes.clone();
        sort_batch(&mut sorted);

        let mut order: Vec<usize> = (0..shapes.len()).collect();
        order.sort_by(|&a, &b| compare_shapes(&shapes[a], &shapes[b]).then(a.cmp(&b)));
        let expected: Vec<Shape> = order.into_iter().map(|i| shapes[i].clone()).collect();

        prop_assert_eq!(sorted, expected);
    }

    /// PROPERTY: Triangles and Purple are exactly the filtered All view.
    #[test]
    fn property_views_partition_all(shapes in proptest::collection::vec(shape(), 0..40)) {
        let total = shapes.len();
        let triangles = shapes.iter().filter(|s| s.kind() == ShapeKind::Triangle).count();
        let purple = shapes
            .iter()
            .filter(|s| s.color().eq_ignore_ascii_case("purple"))
            .count();

        let reports = build_reports(shapes);
        let views: Vec<ReportView> = reports.iter().map(|r| r.view()).collect();
        prop_assert_eq!(views, ReportView::ALL.to_vec());
        prop_assert_eq!(reports[0].len(), total);
        prop_assert_eq!(reports[1].len(), triangles);
        prop_assert_eq!(reports[2].len(), purple);
    }
}
