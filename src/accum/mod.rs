/*
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Compensated summation: a two-term extended-precision accumulator built on
//! the error-free two-sum transformation, following J. R. Shewchuk,
//! [*Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//! Predicates*](https://doi.org/10.1007/PL00009321), Discrete & Computational
//! Geometry 18(3) 305–363 (1997).

mod accumulator;
mod two_sum;

pub use accumulator::Accumulator;
pub use two_sum::two_sum;
