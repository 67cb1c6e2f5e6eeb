//! Convex polygon intersection, after O'Rourke, Chien, Olson and Naddor
//! (1982): two edge pointers rotate around the boundaries, advancing the one
//! aiming at the other's half-plane and collecting crossing points plus the
//! boundary stretches that run inside the other polygon.
//!
//! The algorithm assumes every crossing is a single point that is not a
//! vertex of either polygon; coincident-edge configurations from the paper's
//! special cases are not handled.

use crate::error::{OperationError, Result};
use crate::math::predicates::{orientation_2d, Orientation};
use crate::math::{Point2, Tolerance};
use crate::polygon::{Edge, Polygon};

/// Which polygon's boundary the walk is currently known to travel inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InFlag {
    PIsInside,
    QIsInside,
    Unknown,
}

/// Half-plane test: true if `pt` lies in the closed half-plane to the left
/// of edge `q`'s supporting line.
fn in_half_plane(tol: Tolerance, pt: &Point2, q: &Edge) -> bool {
    orientation_2d(tol, pt, &q.head(), &q.tail()) != Orientation::Clockwise
}

/// The aim relation: true if `p` is heading toward `q`'s half-plane.
///
/// Accounts for whether `p`'s tail already lies in `q`'s half-plane, then
/// reads the sign of the cross product of the two direction vectors.
fn aims_at(tol: Tolerance, p: &Edge, q: &Edge) -> bool {
    let inside = in_half_plane(tol, &p.tail(), q);

    let pdir = p.tail() - p.head();
    let qdir = q.tail() - q.head();
    let cross = qdir.x * pdir.y - qdir.y * pdir.x;

    if inside {
        cross < 0.0
    } else {
        cross >= 0.0
    }
}

/// Intersection region of two convex polygons.
///
/// Both inputs must be convex and in counter-clockwise standard form;
/// returns the intersection region, a copy of the contained polygon when one
/// wholly encloses the other, or `None` when they are disjoint.
///
/// The walk is bounded by the proven cap of `2 * (pn + qn)` edge advances,
/// enforced unconditionally so floating-point edge cases where the first
/// crossing is never exactly re-matched still terminate.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if either polygon fails the
/// convexity precondition, rather than silently producing a wrong region.
pub fn convex_intersect(tol: Tolerance, p: &Polygon, q: &Polygon) -> Result<Option<Polygon>> {
    if !p.convex(tol)? {
        return Err(
            OperationError::InvalidInput("p is not convex in counter-clockwise form".into())
                .into(),
        );
    }
    if !q.convex(tol)? {
        return Err(
            OperationError::InvalidInput("q is not convex in counter-clockwise form".into())
                .into(),
        );
    }

    let p_cycle = p.edges()?;
    let q_cycle = q.edges()?;
    let pn = p.num_edges();
    let qn = q.num_edges();

    let mut intersection = Polygon::new();
    let mut inside = InFlag::Unknown;
    let mut first: Option<Point2> = None;
    let mut pe = &p_cycle[0];
    let mut qe = &q_cycle[0];

    for _ in 1..2 * (pn + qn) {
        if let Some(pt) = pe.intersect(qe, tol) {
            match first {
                None => first = Some(pt),
                // The walk has come back around to the first crossing.
                Some(f) if pt == f => break,
                Some(_) => {}
            }

            intersection.add(pt.x, pt.y);
            inside = if in_half_plane(tol, &pe.tail(), qe) {
                InFlag::PIsInside
            } else {
                InFlag::QIsInside
            };
        }

        // Pick the boundary to advance. When the edges aim at each other or
        // at neither, advance the outside one; before any crossing is known,
        // fall back to the half-plane test on p's tail (the tie-break pinned
        // by the regression test below).
        let aim_p = aims_at(tol, pe, qe);
        let aim_q = aims_at(tol, qe, pe);
        let advance_p = if aim_p == aim_q {
            match inside {
                InFlag::PIsInside => false,
                InFlag::QIsInside => true,
                InFlag::Unknown => !in_half_plane(tol, &pe.tail(), qe),
            }
        } else {
            aim_p
        };

        // A boundary known to run inside contributes its tail to the region
        // before advancing.
        if advance_p {
            if inside == InFlag::PIsInside {
                intersection.add(pe.tail().x, pe.tail().y);
            }
            pe = &p_cycle[pe.next_index()];
        } else {
            if inside == InFlag::QIsInside {
                intersection.add(qe.tail().x, qe.tail().y);
            }
            qe = &q_cycle[qe.next_index()];
        }
    }

    if intersection.num_points() == 0 {
        // No crossings: either disjoint or one polygon contains the other.
        if q.contains_point(&p_cycle[0].tail(), tol)? {
            return Ok(Some(p.clone()));
        }
        if p.contains_point(&q_cycle[0].tail(), tol)? {
            return Ok(Some(q.clone()));
        }
        return Ok(None);
    }

    Ok(Some(intersection))
}
