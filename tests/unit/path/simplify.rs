use super::*;
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn short_inputs_pass_through() {
    assert!(simplify(&[], 5.0).is_empty());
    let two = pts(&[(0.0, 0.0), (0.0, 0.0)]);
    assert_eq!(simplify(&two, 5.0), two);
}

#[test]
fn keeps_endpoints_and_far_points() {
    let input = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (6.0, 0.0), (7.0, 0.0), (8.0, 0.0)]);
    let out = simplify(&input, 5.0);
    assert_eq!(out, pts(&[(0.0, 0.0), (6.0, 0.0), (8.0, 0.0)]));
}

#[test]
fn distance_is_from_last_retained_point() {
    // Each step is 3px, below tolerance, but the running distance from the kept point is not.
    let input = pts(&[(0.0, 0.0), (3.0, 0.0), (6.0, 0.0), (9.0, 0.0), (12.0, 0.0), (13.0, 0.0)]);
    let out = simplify(&input, 5.0);
    assert_eq!(out, pts(&[(0.0, 0.0), (6.0, 0.0), (12.0, 0.0), (13.0, 0.0)]));
}

#[test]
fn degenerate_strokes_keep_endpoints_only() {
    let input = pts(&[(4.0, 4.0); 6]);
    assert_eq!(simplify(&input, 5.0), pts(&[(4.0, 4.0), (4.0, 4.0)]));
}

proptest! {
    #[test]
    fn simplify_is_idempotent(
        raw in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..64),
        tolerance in 0.0f64..20.0,
    ) {
        let input: Vec<Point> = raw.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let once = simplify(&input, tolerance);
        let twice = simplify(&once, tolerance);
        prop_assert_eq!(once, twice);
    }
}
