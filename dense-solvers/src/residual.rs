//! Residual helpers
//!
//! The residual `A·x − b` measures how well a computed solution satisfies
//! the original system; callers and tests use its norm to accept or reject
//! a solve.

use ndarray::{Array1, Array2};

use crate::traits::RealScalar;

/// Compute the residual vector `A·x − b`.
///
/// Panics if the dimensions are inconsistent; these helpers are meant for
/// verification where a malformed call is a programming error.
#[inline]
pub fn residual<T: RealScalar>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> Array1<T> {
    assert_eq!(
        a.ncols(),
        x.len(),
        "matrix columns must match solution length"
    );
    assert_eq!(a.nrows(), b.len(), "matrix rows must match rhs length");
    a.dot(x) - b
}

/// Compute the 2-norm of the residual `‖A·x − b‖`.
#[inline]
pub fn residual_norm<T: RealScalar>(a: &Array2<T>, x: &Array1<T>, b: &Array1<T>) -> T {
    let r = residual(a, x, b);
    let mut sum = T::zero();
    for ri in r.iter() {
        sum += *ri * *ri;
    }
    sum.sqrt()
}
