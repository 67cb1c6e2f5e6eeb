use rand::Rng;

use crate::math::predicates::{orientation_2d, Orientation};
use crate::math::{Point2, Tolerance};
use crate::polygon::Polygon;

/// Number of points drawn by [`compute_random`]. Small enough that the
/// resulting hulls keep interesting shapes.
const RANDOM_SAMPLE: usize = 10;

/// Determines if the last three points of the chain form a non-left turn.
fn last_three_non_left(tol: Tolerance, chain: &[Point2]) -> bool {
    let n = chain.len();
    if n < 3 {
        return false;
    }
    let sign = orientation_2d(tol, &chain[n - 3], &chain[n - 2], &chain[n - 1]);
    sign != Orientation::CounterClockwise
}

/// Convex hull of a point collection (Andrew's monotone chain).
///
/// Returns the hull as a polygon in counter-clockwise order, with the
/// interior to the left of every edge. Duplicate points are tolerated; the
/// backtracking rule discards them as collinear triples. Fewer than three
/// points come back sorted and unchanged, and a fully collinear input
/// degenerates to a two-point segment polygon.
#[must_use]
pub fn compute_hull(tol: Tolerance, points: &[Point2]) -> Polygon {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let n = sorted.len();
    if n < 3 {
        return Polygon::from_points(&sorted);
    }

    // Upper chain: start from the two rightmost points, sweep right-to-left,
    // dropping the middle point while the last three fail to turn left. The
    // amortized O(1) removals per insertion give the O(n log n) total bound.
    let mut upper = vec![sorted[n - 1], sorted[n - 2]];
    for pt in sorted[..n - 2].iter().rev() {
        upper.push(*pt);
        while upper.len() >= 3 && last_three_non_left(tol, &upper) {
            upper.remove(upper.len() - 2);
        }
    }

    // Lower chain: symmetric, from the two leftmost points left-to-right.
    let mut lower = vec![sorted[0], sorted[1]];
    for pt in &sorted[2..] {
        lower.push(*pt);
        while lower.len() >= 3 && last_three_non_left(tol, &lower) {
            lower.remove(lower.len() - 2);
        }
    }

    // Splice: the upper chain's endpoints duplicate the lower chain's, so
    // drop them before appending.
    upper.pop();
    upper.remove(0);
    lower.extend(upper);

    Polygon::from_points(&lower)
}

/// Convex hull of a bounded uniform random point sample.
///
/// Draws a fixed-size batch of points in the box `[x_min, x_max] x
/// [y_min, y_max]` and returns its hull. Generic over the RNG so callers can
/// inject a seeded generator for reproducible draws.
#[must_use]
pub fn compute_random<R: Rng>(
    tol: Tolerance,
    rng: &mut R,
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
) -> Polygon {
    let points: Vec<Point2> = (0..RANDOM_SAMPLE)
        .map(|_| {
            Point2::new(
                rng.gen_range(x_min..=x_max),
                rng.gen_range(y_min..=y_max),
            )
        })
        .collect();
    compute_hull(tol, &points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    /// Closed-half-plane membership against every hull edge.
    fn on_or_inside(tol: Tolerance, hull: &Polygon, pt: &Point2) -> bool {
        hull.edges()
            .unwrap()
            .iter()
            .all(|e| orientation_2d(tol, &e.head(), &e.tail(), pt) != Orientation::Clockwise)
    }

    #[test]
    fn square_with_interior_points() {
        let input = pts(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (2.0, 2.0),
            (1.0, 3.0),
        ]);
        let hull = compute_hull(tol(), &input);
        assert_eq!(hull.num_points(), 4);
        assert!(hull.convex(tol()).unwrap());
        let expected = Polygon::from_points(&pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]));
        assert!(hull.coincides_with(&expected, tol()));
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let input = pts(&[(0.0, 0.0), (3.0, 1.0), (1.0, 4.0), (-2.0, 2.0), (1.0, 1.0)]);
        let hull = compute_hull(tol(), &input);
        assert!(hull.valid());
        assert!(hull.signed_area() > 0.0);
        assert!(hull.convex(tol()).unwrap());
    }

    #[test]
    fn fewer_than_three_points_returned_sorted() {
        let hull = compute_hull(tol(), &pts(&[(2.0, 0.0), (1.0, 0.0)]));
        assert_eq!(hull.num_points(), 2);
        assert_eq!(hull.points()[0], Point2::new(1.0, 0.0));
        assert_eq!(hull.points()[1], Point2::new(2.0, 0.0));
        assert!(!hull.valid());
    }

    #[test]
    fn collinear_input_degenerates_to_segment() {
        let hull = compute_hull(
            tol(),
            &pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]),
        );
        assert_eq!(hull.num_points(), 2);
        assert_eq!(hull.points()[0], Point2::new(0.0, 0.0));
        assert_eq!(hull.points()[1], Point2::new(3.0, 3.0));
        assert!(!hull.valid());
    }

    #[test]
    fn duplicate_points_tolerated() {
        let input = pts(&[
            (0.0, 0.0),
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 0.0),
            (2.0, 3.0),
            (2.0, 3.0),
        ]);
        let hull = compute_hull(tol(), &input);
        assert_eq!(hull.num_points(), 3);
        assert!(hull.convex(tol()).unwrap());
    }

    #[test]
    fn hull_of_hull_is_idempotent() {
        let input = pts(&[(0.0, 0.0), (5.0, 1.0), (6.0, 4.0), (2.0, 6.0), (-1.0, 3.0)]);
        let hull = compute_hull(tol(), &input);
        let again = compute_hull(tol(), hull.points());
        assert!(hull.coincides_with(&again, tol()));
    }

    #[test]
    fn random_hull_is_reproducible_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let p = compute_random(tol(), &mut rng, 0.0, 0.0, 512.0, 512.0);
        let mut rng2 = StdRng::seed_from_u64(42);
        let q = compute_random(tol(), &mut rng2, 0.0, 0.0, 512.0, 512.0);
        assert_eq!(p, q);
        assert!(p.valid());
        assert!(p.convex(tol()).unwrap());
        for pt in &p {
            assert!(pt.x >= 0.0 && pt.x <= 512.0);
            assert!(pt.y >= 0.0 && pt.y <= 512.0);
        }
    }

    proptest! {
        #[test]
        fn no_input_point_escapes_the_hull(
            coords in proptest::collection::vec((-100.0_f64..100.0, -100.0_f64..100.0), 0..40)
        ) {
            let input = pts(&coords);
            let hull = compute_hull(tol(), &input);
            prop_assert!(hull.num_points() <= input.len());
            if hull.valid() {
                for pt in &input {
                    prop_assert!(on_or_inside(tol(), &hull, pt));
                }
            }
        }

        #[test]
        fn valid_hulls_are_convex_ccw(
            coords in proptest::collection::vec((-100.0_f64..100.0, -100.0_f64..100.0), 3..40)
        ) {
            let hull = compute_hull(tol(), &pts(&coords));
            if hull.valid() {
                prop_assert!(hull.convex(tol()).unwrap_or(false));
                prop_assert!(hull.signed_area() >= 0.0);
            }
        }
    }
}
