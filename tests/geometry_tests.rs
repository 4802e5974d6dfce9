//! Bridge detection tests

use road_view::viewer::{find_bridges, segment_pair_bridges, Point, Segment};

fn pair(a: Segment, b: Segment) -> Vec<Point> {
    let mut bridges = Vec::new();
    segment_pair_bridges(&a, &b, &mut bridges);
    bridges
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}

#[test]
fn test_diagonal_crossing() {
    let bridges = find_bridges(&[
        Segment::new((0, 0), (10, 10)),
        Segment::new((0, 10), (10, 0)),
    ]);
    assert_eq!(bridges, vec![Point::new(5.0, 5.0)]);
}

#[test]
fn test_perpendicular_crossing_off_center() {
    let bridges = pair(Segment::new((0, 0), (10, 0)), Segment::new((2, -5), (2, 15)));
    assert_eq!(bridges, vec![Point::new(2.0, 0.0)]);
}

#[test]
fn test_crossing_is_order_independent() {
    let cases = [
        (Segment::new((0, 0), (10, 10)), Segment::new((0, 10), (10, 0))),
        (Segment::new((0, 0), (10, 0)), Segment::new((2, -5), (2, 15))),
        (Segment::new((0, 0), (10, 0)), Segment::new((5, 0), (15, 0))),
        (Segment::new((3, 1), (3, 9)), Segment::new((3, 4), (3, 20))),
        (Segment::new((0, 0), (8, 4)), Segment::new((0, 4), (8, 0))),
    ];

    for (a, b) in cases {
        assert_eq!(sorted(pair(a, b)), sorted(pair(b, a)), "{:?} / {:?}", a, b);
        let reversed = Segment { start: b.end, end: b.start };
        assert_eq!(sorted(pair(a, b)), sorted(pair(a, reversed)), "{:?} / {:?}", a, reversed);
    }
}

#[test]
fn test_shared_endpoint_is_a_junction() {
    // End of one is the start of the other
    assert!(pair(Segment::new((0, 0), (10, 0)), Segment::new((10, 0), (10, 10))).is_empty());
    // Both start at the same point
    assert!(pair(Segment::new((0, 0), (10, 0)), Segment::new((0, 0), (0, 10))).is_empty());
    // Both end at the same point
    assert!(pair(Segment::new((0, 0), (10, 10)), Segment::new((20, 0), (10, 10))).is_empty());
}

#[test]
fn test_t_junction_is_reported() {
    // One segment ends in the interior of the other
    let bridges = pair(Segment::new((0, 0), (10, 0)), Segment::new((5, 0), (5, 10)));
    assert_eq!(bridges, vec![Point::new(5.0, 0.0)]);
}

#[test]
fn test_horizontal_collinear_overlap() {
    let bridges = pair(Segment::new((0, 0), (10, 0)), Segment::new((5, 0), (15, 0)));
    let expected: Vec<Point> = (6..=9).map(|x| Point::new(f64::from(x), 0.0)).collect();
    assert_eq!(bridges, expected);
}

#[test]
fn test_vertical_collinear_overlap() {
    let bridges = pair(Segment::new((3, 10), (3, 0)), Segment::new((3, 2), (3, 5)));
    assert_eq!(bridges, vec![Point::new(3.0, 3.0), Point::new(3.0, 4.0)]);
}

#[test]
fn test_collinear_touching_end_to_end() {
    assert!(pair(Segment::new((0, 0), (10, 0)), Segment::new((10, 0), (20, 0))).is_empty());
    assert!(pair(Segment::new((0, 0), (0, 10)), Segment::new((0, 10), (0, 20))).is_empty());
}

#[test]
fn test_collinear_disjoint() {
    assert!(pair(Segment::new((0, 0), (10, 0)), Segment::new((15, 0), (20, 0))).is_empty());
    assert!(pair(Segment::new((4, 0), (4, 3)), Segment::new((4, 30), (4, 8))).is_empty());
}

#[test]
fn test_collinear_fractional_overlap() {
    let bridges = pair(
        Segment::new((0.0, 1.0), (4.5, 1.0)),
        Segment::new((1.5, 1.0), (9.0, 1.0)),
    );
    assert_eq!(
        bridges,
        vec![Point::new(2.0, 1.0), Point::new(3.0, 1.0), Point::new(4.0, 1.0)]
    );
}

#[test]
fn test_parallel_non_collinear() {
    assert!(pair(Segment::new((0, 0), (10, 0)), Segment::new((0, 5), (10, 5))).is_empty());
    assert!(pair(Segment::new((0, 0), (10, 10)), Segment::new((1, 0), (11, 10))).is_empty());
}

#[test]
fn test_diagonal_collinear_not_expanded() {
    assert!(pair(Segment::new((0, 0), (10, 10)), Segment::new((5, 5), (15, 15))).is_empty());
}

#[test]
fn test_lines_crossing_outside_segments() {
    assert!(pair(Segment::new((0, 0), (1, 1)), Segment::new((0, 10), (10, 0))).is_empty());
}

#[test]
fn test_degenerate_segment_is_safe() {
    let point = Segment::new((3, 3), (3, 3));
    let others = [
        Segment::new((3, 3), (3, 3)),
        Segment::new((0, 0), (10, 10)),
        Segment::new((3, 0), (3, 10)),
        Segment::new((3, 20), (3, 10)),
        Segment::new((0, 3), (10, 3)),
        Segment::new((10, 3), (20, 3)),
        Segment::new((0, 0), (10, 0)),
    ];

    for other in others {
        assert!(pair(point, other).is_empty(), "{:?}", other);
        assert!(pair(other, point).is_empty(), "{:?}", other);
    }
}

#[test]
fn test_find_bridges_over_network() {
    let segments = vec![
        Segment::new((0, 0), (50, 0)),
        Segment::new((50, 0), (50, 50)),
        Segment::new((50, 50), (0, 50)),
        Segment::new((0, 50), (0, 0)),
        // Cuts straight across the square
        Segment::new((25, -10), (25, 60)),
    ];
    let bridges = sorted(find_bridges(&segments));
    assert_eq!(bridges, vec![Point::new(25.0, 0.0), Point::new(25.0, 50.0)]);
}

#[test]
fn test_find_bridges_keeps_duplicates() {
    // Three segments through one point give three pairs
    let segments = vec![
        Segment::new((0, 5), (10, 5)),
        Segment::new((5, 0), (5, 10)),
        Segment::new((0, 0), (10, 10)),
    ];
    let bridges = find_bridges(&segments);
    assert_eq!(bridges.len(), 3);
    assert!(bridges
        .iter()
        .all(|p| (p.x - 5.0).abs() < 1e-12 && (p.y - 5.0).abs() < 1e-12));
}

#[test]
fn test_find_bridges_empty_and_single() {
    assert!(find_bridges(&[]).is_empty());
    assert!(find_bridges(&[Segment::new((0, 0), (1, 1))]).is_empty());
}
