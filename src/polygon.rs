use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::predicates::{coincident_2d, orientation_2d, Orientation};
use crate::math::{Point2, Tolerance, Vector2};

/// A directed segment of a polygon boundary.
///
/// An edge runs `head -> tail` and carries the index of its successor edge
/// within the owning boundary cycle. A freshly constructed edge is a cycle
/// of one (`next = 0`); [`Polygon::edges`] rewires successor indices when it
/// builds a full cycle. Edges are disposable values rebuilt on demand and
/// never mutated after the cycle is linked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    head: Point2,
    tail: Point2,
    next: usize,
}

impl Edge {
    /// Creates an edge for the consecutive points `head` and `tail`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateEdge`] if head and tail are
    /// identity-equal. A zero-length edge is never silently produced.
    pub fn new(head: Point2, tail: Point2) -> Result<Self> {
        if head == tail {
            return Err(GeometryError::DegenerateEdge {
                x: head.x,
                y: head.y,
            }
            .into());
        }
        Ok(Self {
            head,
            tail,
            next: 0,
        })
    }

    /// Returns the head point of the edge.
    #[must_use]
    pub fn head(&self) -> Point2 {
        self.head
    }

    /// Returns the tail point of the edge.
    #[must_use]
    pub fn tail(&self) -> Point2 {
        self.tail
    }

    /// Returns the index of the successor edge in the owning cycle.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// Intersection between two edges, aside from shared endpoints.
    ///
    /// Edges sharing any endpoint by identity never report an intersection;
    /// the vertex where two boundary edges meet is not a crossing.
    #[must_use]
    pub fn intersect(&self, other: &Edge, tol: Tolerance) -> Option<Point2> {
        if self.head == other.head || self.head == other.tail {
            return None;
        }
        if self.tail == other.head || self.tail == other.tail {
            return None;
        }
        segment_segment_intersect_2d(tol, &self.head, &self.tail, &other.head, &other.tail)
    }
}

/// A polygon as an ordered sequence of points in Cartesian space.
///
/// The polygon is assumed closed: once three or more points exist there is a
/// final closing edge from the last point back to the first. With fewer
/// points it is a bare point or segment container, still iterable and
/// renderable but never area-bearing.
///
/// Derived structural equality is order-sensitive and exact; use
/// [`Polygon::coincides_with`] for equality up to cyclic rotation under a
/// tolerance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from a list of points. Each point is value-copied,
    /// so mutating the source never mutates the polygon.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Extends the polygon with an additional `(x, y)` point.
    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(Point2::new(x, y));
    }

    /// Deletes the `n`th point from the polygon.
    pub fn remove(&mut self, n: usize) {
        self.points.remove(n);
    }

    /// Returns the points of the polygon in order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns an iterator over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2> {
        self.points.iter()
    }

    /// Returns the number of points in the polygon.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of edges in the polygon.
    ///
    /// Zero or one points have no edges; exactly two points form a single
    /// degenerate segment edge; three or more points have one edge per
    /// point, including the closing edge.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// A polygon becomes valid (closed, area-bearing) with three or more points.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Builds the boundary cycle for the current point sequence.
    ///
    /// The cycle is rebuilt fresh on every call, never cached: one edge per
    /// consecutive point pair, plus a closing edge from the last point back
    /// to the first when the polygon is valid. Successor indices wrap so the
    /// edge list forms a single closed cycle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateEdge`] if two consecutive points
    /// are identity-equal.
    pub fn edges(&self) -> Result<Vec<Edge>> {
        let n = self.points.len();
        let mut cycle = Vec::with_capacity(self.num_edges());
        for i in 0..n.saturating_sub(1) {
            cycle.push(Edge::new(self.points[i], self.points[i + 1])?);
        }
        if self.valid() {
            cycle.push(Edge::new(self.points[n - 1], self.points[0])?);
        }

        let m = cycle.len();
        for (i, e) in cycle.iter_mut().enumerate() {
            e.next = (i + 1) % m;
        }
        Ok(cycle)
    }

    /// Determines if the polygon is simple: no two edges of the boundary
    /// cross each other. Edge pairs that meet only at a shared vertex are
    /// filtered by the identity rule, so weakly simple polygons pass.
    ///
    /// O(n^2) in the edge count, which is acceptable at the interactive
    /// input sizes this kernel targets.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-edge errors from [`Polygon::edges`].
    pub fn simple(&self, tol: Tolerance) -> Result<bool> {
        let cycle = self.edges()?;
        for i in 0..cycle.len() {
            for j in (i + 1)..cycle.len() {
                if cycle[i].intersect(&cycle[j], tol).is_some() {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// Determines if the polygon is convex and in standard form: points and
    /// edges in counter-clockwise order with the interior to the left of
    /// every edge.
    ///
    /// Requires validity and simplicity, then walks every consecutive vertex
    /// triple (wrapping) requiring a non-right turn throughout.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-edge errors from [`Polygon::edges`].
    pub fn convex(&self, tol: Tolerance) -> Result<bool> {
        if !self.valid() || !self.simple(tol)? {
            return Ok(false);
        }

        let n = self.points.len();
        for i in 0..n {
            let sign = orientation_2d(
                tol,
                &self.points[i],
                &self.points[(i + 1) % n],
                &self.points[(i + 2) % n],
            );
            if sign == Orientation::Clockwise {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Coarse boundary-crossing test: true iff any edge of `self` intersects
    /// any edge of `other`. Detects overlap, not the intersection shape.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-edge errors from [`Polygon::edges`].
    pub fn intersects(&self, other: &Polygon, tol: Tolerance) -> Result<bool> {
        for e in self.edges()? {
            for o in other.edges()? {
                if e.intersect(&o, tol).is_some() {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Angle-sum containment test for convex polygons.
    ///
    /// Sums the angle subtended at `pt` by every boundary edge (law of
    /// cosines on the edge/point distances); the point is inside iff the sum
    /// is epsilon-equal to 360 degrees. Only meaningful for convex polygons;
    /// a point coinciding with a vertex is not handled.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-edge errors from [`Polygon::edges`].
    pub fn contains_point(&self, pt: &Point2, tol: Tolerance) -> Result<bool> {
        let mut sum = 0.0_f64;
        for e in self.edges()? {
            let c = (e.head() - e.tail()).norm();
            let a = (pt - e.head()).norm();
            let b = (pt - e.tail()).norm();
            let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
            sum += cos.acos().to_degrees();
        }
        Ok(tol.is_zero(sum - 360.0))
    }

    /// Signed area of the polygon (shoelace formula).
    ///
    /// Positive for counter-clockwise, negative for clockwise, zero below
    /// three points.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            sum += self.points[i].x * self.points[j].y - self.points[j].x * self.points[i].y;
        }
        sum * 0.5
    }

    /// Returns a copy of the polygon translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self {
            points: self.points.iter().map(|p| p + offset).collect(),
        }
    }

    /// Equality up to cyclic rotation of the vertex sequence, with point
    /// comparison under the tolerance. This is the verification relation:
    /// two traversals of the same boundary that start at different vertices
    /// coincide.
    #[must_use]
    pub fn coincides_with(&self, other: &Polygon, tol: Tolerance) -> bool {
        let n = self.points.len();
        if n != other.points.len() {
            return false;
        }
        if n == 0 {
            return true;
        }
        (0..n).any(|r| {
            (0..n).all(|i| coincident_2d(tol, &self.points[(i + r) % n], &other.points[i]))
        })
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
