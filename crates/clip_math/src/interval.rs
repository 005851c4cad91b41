//! Closed real intervals `[lo, hi]` with an explicit empty state.
//!
//! An interval whose lower bound exceeds its upper bound is empty. The
//! canonical empty interval is `[+inf, -inf]`: growing it with
//! [`Interval::extend_to`] collapses it onto the new point, which makes it
//! the natural starting value when accumulating a range.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

use crate::coord::{infinity, Coord};
use crate::error::{IntervalError, IntervalResult};

/// A closed range of real numbers, possibly empty.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Interval {
    lo: Coord,
    hi: Coord,
}

impl Interval {
    /// The canonical empty interval `[+inf, -inf]`.
    pub const EMPTY: Interval = Interval {
        lo: Coord::INFINITY,
        hi: Coord::NEG_INFINITY,
    };

    /// Create an interval spanning `u` and `v`, in either order.
    pub fn new(u: Coord, v: Coord) -> Self {
        if u < v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// Create the canonical empty interval.
    pub fn empty() -> Self {
        Self {
            lo: infinity(),
            hi: -infinity(),
        }
    }

    /// Create a degenerate interval `[u, u]`.
    pub fn point(u: Coord) -> Self {
        Self { lo: u, hi: u }
    }

    /// Build the smallest interval holding every value in `values`.
    ///
    /// Fails with [`IntervalError::EmptyInput`] when `values` is empty.
    pub fn from_slice(values: &[Coord]) -> IntervalResult<Self> {
        let (first, rest) = values.split_first().ok_or(IntervalError::EmptyInput)?;
        let mut result = Self::point(*first);
        for &value in rest {
            result.extend_to(value);
        }
        Ok(result)
    }

    #[inline]
    pub fn min(&self) -> Coord {
        self.lo
    }

    #[inline]
    pub fn max(&self) -> Coord {
        self.hi
    }

    /// Width of the interval (`hi - lo`). Negative for empty intervals.
    #[inline]
    pub fn extent(&self) -> Coord {
        self.hi - self.lo
    }

    #[inline]
    pub fn middle(&self) -> Coord {
        (self.hi + self.lo) * 0.5
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Returns true if `value` lies within `[lo, hi]` (inclusive).
    #[inline]
    pub fn contains(&self, value: Coord) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns true if `other` is a subset of this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Returns true if the two intervals share at least one point.
    ///
    /// Either endpoint of `other` lies inside `self`, or `other` swallows
    /// `self` whole. The test is not symmetric for empty intervals: any
    /// interval holds the `[+inf, -inf]` sentinel as a subset.
    pub fn intersects(&self, other: &Interval) -> bool {
        self.contains(other.lo) || self.contains(other.hi) || other.contains_interval(self)
    }

    /// Shift both bounds by `amount`.
    pub fn translate(&mut self, amount: Coord) {
        self.lo += amount;
        self.hi += amount;
    }

    pub fn translated(&self, amount: Coord) -> Interval {
        let mut result = *self;
        result.translate(amount);
        result
    }

    /// Multiply both bounds by `s`, swapping them when `s` is negative.
    pub fn scale(&mut self, s: Coord) {
        if s < 0.0 {
            let lo = self.lo;
            self.lo = self.hi * s;
            self.hi = lo * s;
        } else {
            self.lo *= s;
            self.hi *= s;
        }
    }

    pub fn scaled(&self, s: Coord) -> Interval {
        let mut result = *self;
        result.scale(s);
        result
    }

    /// Divide both bounds by `s`, swapping them when `s` is negative.
    ///
    /// Division by zero is not checked and yields IEEE infinities or NaN.
    pub fn divide(&mut self, s: Coord) {
        if s < 0.0 {
            let lo = self.lo;
            self.lo = self.hi / s;
            self.hi = lo / s;
        } else {
            self.lo /= s;
            self.hi /= s;
        }
    }

    pub fn divided(&self, s: Coord) -> Interval {
        let mut result = *self;
        result.divide(s);
        result
    }

    /// Set the lower bound.
    ///
    /// If `value` is past the upper bound the interval wraps: the old upper
    /// bound becomes the lower bound and `value` the new upper bound.
    pub fn set_min(&mut self, value: Coord) {
        if value > self.hi {
            self.lo = self.hi;
            self.hi = value;
        } else {
            self.lo = value;
        }
    }

    /// Set the upper bound, wrapping over the lower bound like [`Interval::set_min`].
    pub fn set_max(&mut self, value: Coord) {
        if value < self.lo {
            self.hi = self.lo;
            self.lo = value;
        } else {
            self.hi = value;
        }
    }

    /// Grow the interval, if needed, so that it contains `value`.
    ///
    /// NaN fails both comparisons and leaves the interval untouched.
    #[inline]
    pub fn extend_to(&mut self, value: Coord) {
        if value < self.lo {
            self.lo = value;
        }
        // no else: a point can move both bounds of an empty interval
        if value > self.hi {
            self.hi = value;
        }
    }

    /// Push both bounds outward by `amount` (inward when negative).
    ///
    /// A large negative `amount` leaves an inverted, empty interval.
    pub fn expand_by(&mut self, amount: Coord) {
        self.lo -= amount;
        self.hi += amount;
    }

    /// Grow this interval to cover `other` as well.
    pub fn union_with(&mut self, other: &Interval) {
        if other.lo < self.lo {
            self.lo = other.lo;
        }
        if other.hi > self.hi {
            self.hi = other.hi;
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Coord> for Interval {
    fn from(u: Coord) -> Self {
        Self::point(u)
    }
}

impl Index<usize> for Interval {
    type Output = Coord;

    fn index(&self, index: usize) -> &Coord {
        match index {
            0 => &self.lo,
            1 => &self.hi,
            _ => panic!("Interval bound index out of range: {}", index),
        }
    }
}

impl Extend<Coord> for Interval {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for value in iter {
            self.extend_to(value);
        }
    }
}

impl FromIterator<Coord> for Interval {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut result = Interval::EMPTY;
        result.extend(iter);
        result
    }
}

/// Sum of two intervals: `[a.lo + b.lo, a.hi + b.hi]`.
pub fn add(a: &Interval, b: &Interval) -> Interval {
    Interval::new(a.min() + b.min(), a.max() + b.max())
}

/// Difference of two intervals: `[a.lo - b.hi, a.hi - b.lo]`.
pub fn subtract(a: &Interval, b: &Interval) -> Interval {
    Interval::new(a.min() - b.max(), a.max() - b.min())
}

/// Product of two intervals, spanning all four corner products.
pub fn multiply(a: &Interval, b: &Interval) -> Interval {
    let mut result = Interval::point(a.min() * b.min());
    result.extend_to(a.min() * b.max());
    result.extend_to(a.max() * b.min());
    result.extend_to(a.max() * b.max());
    result
}

/// Smallest interval covering both `a` and `b`.
///
/// Bounds are taken as-is, so unifying two empty intervals stays empty.
pub fn unify(a: &Interval, b: &Interval) -> Interval {
    Interval {
        lo: a.min().min(b.min()),
        hi: a.max().max(b.max()),
    }
}

/// Overlap of `a` and `b`, or `None` if they share less than a segment.
///
/// Intervals that only touch at a single point have no intersection.
pub fn intersect(a: &Interval, b: &Interval) -> Option<Interval> {
    let u = a.min().max(b.min());
    let v = a.max().min(b.max());
    if u >= v {
        None
    } else {
        Some(Interval::new(u, v))
    }
}

impl Add<Coord> for Interval {
    type Output = Interval;

    fn add(self, amount: Coord) -> Interval {
        self.translated(amount)
    }
}

impl Sub<Coord> for Interval {
    type Output = Interval;

    fn sub(self, amount: Coord) -> Interval {
        self.translated(-amount)
    }
}

impl AddAssign<Coord> for Interval {
    fn add_assign(&mut self, amount: Coord) {
        self.translate(amount);
    }
}

impl SubAssign<Coord> for Interval {
    fn sub_assign(&mut self, amount: Coord) {
        self.lo -= amount;
        self.hi -= amount;
    }
}

impl Mul<Coord> for Interval {
    type Output = Interval;

    fn mul(self, s: Coord) -> Interval {
        self.scaled(s)
    }
}

impl Div<Coord> for Interval {
    type Output = Interval;

    fn div(self, s: Coord) -> Interval {
        self.divided(s)
    }
}

impl MulAssign<Coord> for Interval {
    fn mul_assign(&mut self, s: Coord) {
        self.scale(s);
    }
}

impl DivAssign<Coord> for Interval {
    fn div_assign(&mut self, s: Coord) {
        self.divide(s);
    }
}

/// Negation is the identity on intervals.
impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        self
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, other: Interval) -> Interval {
        add(&self, &other)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, other: Interval) -> Interval {
        subtract(&self, &other)
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, other: Interval) -> Interval {
        multiply(&self, &other)
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, other: Interval) {
        *self = add(self, &other);
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, other: Interval) {
        *self = subtract(self, &other);
    }
}

impl MulAssign for Interval {
    fn mul_assign(&mut self, other: Interval) {
        *self = multiply(self, &other);
    }
}
