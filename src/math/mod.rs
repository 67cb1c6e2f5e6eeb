pub mod intersect_2d;
pub mod predicates;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default geometric tolerance for floating-point comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Tolerance policy for floating-point geometric comparisons.
///
/// Determinant and trigonometric computations accumulate rounding error, so
/// every geometric decision snaps near-zero magnitudes to exact zero before
/// branching. The epsilon is carried as an explicit value rather than a
/// global constant so callers can run strict and loose regimes side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon. Must be positive.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Returns the epsilon of this tolerance.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// Returns true iff `v` is within epsilon of zero.
    #[must_use]
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.epsilon
    }

    /// Snaps `v` to exactly zero when it is epsilon-zero, else returns it unchanged.
    #[must_use]
    pub fn snap(self, v: f64) -> f64 {
        if self.is_zero(v) {
            0.0
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epsilon() {
        let tol = Tolerance::default();
        assert!((tol.epsilon() - 1e-9).abs() < f64::EPSILON);
    }

    #[test]
    fn is_zero_boundaries() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(0.0));
        assert!(tol.is_zero(1e-9));
        assert!(tol.is_zero(-1e-9));
        assert!(!tol.is_zero(1.1e-9));
        assert!(!tol.is_zero(-1.1e-9));
    }

    #[test]
    fn snap_near_zero() {
        let tol = Tolerance::default();
        assert!(tol.snap(1e-12) == 0.0);
        assert!(tol.snap(-1e-12) == 0.0);
        assert!((tol.snap(0.5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn injected_epsilon() {
        let strict = Tolerance::new(1e-15);
        assert!(!strict.is_zero(1e-12));
        let loose = Tolerance::new(1e-3);
        assert!(loose.is_zero(1e-4));
    }
}
