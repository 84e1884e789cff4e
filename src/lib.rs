/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Extended-precision running sums for geodesic computations.
//!
//! Accumulating path lengths or areas over many segments with a plain `f64`
//! loses every increment smaller than one ULP of the running total. The
//! [`Accumulator`](accum::Accumulator) in this crate carries a second,
//! low-order correction term and folds every increment through it, giving
//! roughly twice the significant bits of a plain `f64` accumulation at the
//! cost of a few extra floating-point operations per addition.

pub mod accum;

/// Use `use geodesic_sum::prelude::*;` to import the accumulator and the
/// two-sum primitive.
pub mod prelude {
    use super::*;
    pub use accum::two_sum;
    pub use accum::Accumulator;
}
