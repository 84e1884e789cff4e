use super::two_sum;
use common_traits::UpcastableInto;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{AddAssign, Neg};

/// An accumulator for sums with roughly twice the precision of `f64`.
///
/// The value is held as two terms: a primary sum and a low-order correction,
/// so the true total is `sum + correction` to extended precision. Every
/// [`add`](Accumulator::add) folds the increment through the correction term
/// before re-summing it into the primary term, which captures the rounding
/// error a plain `f64` running total would discard.
///
/// This improves precision by a constant factor (one extra trailing term),
/// not without bound.
///
/// # Examples
/// ```
/// # use geodesic_sum::accum::Accumulator;
/// let mut acc = Accumulator::new();
/// acc.add(1e16);
/// acc.add(1.0);
/// acc.add(-1e16);
/// // A plain f64 running total would report 0.0 here.
/// assert_eq!(acc.sum(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accumulator {
    /// The primary term: the best `f64` approximation of the total.
    sum: f64,
    /// The low-order correction term, a non-overlapping refinement of `sum`.
    correction: f64,
}

impl Accumulator {
    /// Creates an accumulator holding zero.
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            correction: 0.0,
        }
    }

    /// Creates an accumulator holding `value`.
    ///
    /// # Arguments
    /// - `value`: the initial value; any type losslessly widenable to `f64`
    ///   (`f32` or `f64`).
    pub fn with_initial(value: impl UpcastableInto<f64>) -> Self {
        Self {
            sum: value.upcast(),
            correction: 0.0,
        }
    }

    /// Returns the best `f64` approximation of the total.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Returns the low-order correction term.
    ///
    /// Callers wanting the full extended-precision value may combine this
    /// with [`sum`](Accumulator::sum); the reduced-precision total is always
    /// just [`sum`](Accumulator::sum).
    pub fn correction(&self) -> f64 {
        self.correction
    }

    /// Adds a value.
    ///
    /// The increment is folded into the correction term first and the result
    /// into the primary term, each step through the error-free
    /// [`two_sum`](super::two_sum), so the rounding error of every addition
    /// is carried forward rather than discarded. Increments of wildly
    /// different magnitudes need no pre-sorting. `NaN` and infinities
    /// propagate per IEEE-754.
    ///
    /// # Arguments
    /// - `value`: the value to add; any type losslessly widenable to `f64`.
    pub fn add(&mut self, value: impl UpcastableInto<f64>) {
        let (y, u) = two_sum(value.upcast(), self.correction);
        let (s, t) = two_sum(y, self.sum);
        if s == 0.0 {
            // A float sum rounds to zero only when it is exactly zero, so t
            // is zero here and u carries the whole remaining value. Promote
            // it to the primary term so the next increment is not folded
            // into a zero primary with a stale correction.
            self.sum = u;
            self.correction = 0.0;
        } else {
            self.sum = s;
            self.correction = t + u;
        }
    }

    /// Returns the total that [`sum`](Accumulator::sum) would report after
    /// adding `value`, without modifying the accumulator.
    ///
    /// # Arguments
    /// - `value`: the value to add; any type losslessly widenable to `f64`.
    pub fn sum_with(&self, value: impl UpcastableInto<f64>) -> f64 {
        let mut copy = *self;
        copy.add(value);
        copy.sum()
    }
}

impl From<f64> for Accumulator {
    fn from(value: f64) -> Self {
        Self::with_initial(value)
    }
}

impl From<f32> for Accumulator {
    fn from(value: f32) -> Self {
        Self::with_initial(value)
    }
}

impl Neg for Accumulator {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            sum: -self.sum,
            correction: -self.correction,
        }
    }
}

// No `std::ops::Add` impl: the trait's by-value `add` would win method
// resolution over the inherent `&mut self` one wherever the trait is in
// scope, turning `acc.add(v)` into an update of a discarded copy. `+=` and
// `iter::Sum` cover the operator sugar without that hazard.
impl<T: UpcastableInto<f64>> AddAssign<T> for Accumulator {
    fn add_assign(&mut self, rhs: T) {
        self.add(rhs)
    }
}

impl Sum<f64> for Accumulator {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        for value in iter {
            acc.add(value);
        }
        acc
    }
}

impl<'a> Sum<&'a f64> for Accumulator {
    fn sum<I: Iterator<Item = &'a f64>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Compares the extended-precision total against a plain double.
///
/// The comparison goes through [`sum_with`](Accumulator::sum_with) so the
/// correction term participates: an accumulator holding `1e16 + 1` compares
/// unequal to `1e16` even though its primary term alone is `1e16`.
impl PartialEq<f64> for Accumulator {
    fn eq(&self, other: &f64) -> bool {
        self.sum_with(-*other) == 0.0
    }
}

impl PartialOrd<f64> for Accumulator {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.sum_with(-*other).partial_cmp(&0.0)
    }
}
