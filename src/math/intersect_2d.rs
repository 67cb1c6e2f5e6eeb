use super::{Point2, Tolerance};

/// Bounded segment-segment intersection in 2D.
///
/// Solves the cross-ratio 2x2 system for the parameters of segments
/// `a0 -> a1` and `b0 -> b1`. Returns the intersection point when both
/// parameters fall in `[0, 1]`, with the boundaries widened by the tolerance
/// so endpoint-touching counts as intersecting.
///
/// Returns `None` for parallel or coincident segments (epsilon-zero
/// denominator) and for intersections outside either segment. Numeric edge
/// cases are never errors; absence is the "no intersection" encoding.
#[must_use]
pub fn segment_segment_intersect_2d(
    tol: Tolerance,
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;

    let denom = db.y * da.x - db.x * da.y;
    if tol.is_zero(denom) {
        return None;
    }

    let t = (db.x * (a0.y - b0.y) - db.y * (a0.x - b0.x)) / denom;
    let u = (da.x * (a0.y - b0.y) - da.y * (a0.x - b0.x)) / denom;

    // Both parameters must land in [0, 1], snapped at each boundary.
    if tol.snap(t) >= 0.0 && tol.snap(t - 1.0) <= 0.0 && tol.snap(u) >= 0.0 && tol.snap(u - 1.0) <= 0.0 {
        let t = t.clamp(0.0, 1.0);
        Some(Point2::new(a0.x + t * da.x, a0.y + t * da.y))
    } else {
        None
    }
}
