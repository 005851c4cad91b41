//! Scalar coordinate helpers shared by the interval code and its callers.

/// Scalar type used for every bound and coordinate in `clip`.
pub type Coord = f64;

/// Default absolute tolerance for approximate scalar comparisons.
pub const EPSILON: Coord = 1e-5;

/// Positive infinity as a `Coord`.
#[inline]
pub fn infinity() -> Coord {
    Coord::INFINITY
}

/// Returns true if `a` and `b` differ by at most `eps` (absolute tolerance).
///
/// NaN is never near anything, including itself.
#[inline]
pub fn are_near(a: Coord, b: Coord, eps: Coord) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_are_near_within_tolerance() {
        assert!(are_near(1.0, 1.0 + 0.5e-5, EPSILON));
        assert!(are_near(-3.0, -3.0, 0.0));
        assert!(!are_near(1.0, 1.1, EPSILON));
    }

    #[test]
    fn test_are_near_boundary_is_inclusive() {
        assert!(are_near(0.0, 0.5, 0.5));
        assert!(!are_near(0.0, 0.5000001, 0.5));
    }

    #[test]
    fn test_are_near_nan() {
        assert!(!are_near(f64::NAN, f64::NAN, 1.0));
        assert!(!are_near(0.0, f64::NAN, infinity()));
    }

    #[test]
    fn test_infinity() {
        assert_eq!(infinity(), f64::INFINITY);
        assert!(infinity() > f64::MAX);
    }
}
