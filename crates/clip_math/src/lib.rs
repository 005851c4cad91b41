//! Clip Math - Closed real intervals and scalar helpers for curve clipping.
//!
//! The central type is [`Interval`], a `[lo, hi]` range over `f64` with a
//! canonical empty value. Free functions in [`interval`] provide interval
//! arithmetic (`add`, `subtract`, `multiply`) and set-like combination
//! (`unify`, `intersect`).
//!
//! # Example
//!
//! ```
//! use clip_math::{interval::multiply, Interval};
//!
//! let mut range = Interval::empty();
//! range.extend(vec![0.25, 0.75, 0.5]);
//! assert_eq!(range, Interval::new(0.25, 0.75));
//!
//! let product = multiply(&Interval::new(-2.0, 3.0), &Interval::new(-1.0, 4.0));
//! assert_eq!(product, Interval::new(-8.0, 12.0));
//! ```

// Re-export glam for convenience
pub use glam::DVec2;

mod coord;
mod error;
pub mod interval;

pub use coord::{are_near, infinity, Coord, EPSILON};
pub use error::{IntervalError, IntervalResult};
pub use interval::Interval;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let range = Interval::from_slice(&[1.0, -1.0]).unwrap();
        assert!(are_near(range.middle(), 0.0, EPSILON));
        assert_eq!(DVec2::from_angle(0.0), DVec2::X);
    }
}
