//! One-shot Gaussian elimination with back substitution
//!
//! Forward-eliminates a working copy of `(A, b)` and back-substitutes the
//! reduced upper-triangular system. No `L` factor is materialized, which
//! makes this the cheaper path when only a single solve is needed; for
//! repeated right-hand sides factor once with
//! [`DoolittleLu`](crate::DoolittleLu) instead. Agrees with the explicit
//! LU path to floating-point rounding.

use ndarray::{Array1, Array2};

use crate::direct::substitution::back_substitution_with;
use crate::direct::{check_rhs, check_square, pivot_failure};
use crate::error::Result;
use crate::traits::RealScalar;

/// Default absolute pivot tolerance for the elimination.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Solve `Ax = b` by Gaussian elimination with the default pivot tolerance.
pub fn gauss_solve<T: RealScalar>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    gauss_solve_with(a, b, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
}

/// [`gauss_solve`] with an explicit absolute pivot tolerance.
pub fn gauss_solve_with<T: RealScalar>(
    a: &Array2<T>,
    b: &Array1<T>,
    tolerance: T,
) -> Result<Array1<T>> {
    let n = check_square(a)?;
    check_rhs(n, b)?;

    let mut a = a.clone();
    let mut b = b.clone();

    // Forward elimination on (A, b): A -> U, b -> c.
    for k in 0..n.saturating_sub(1) {
        let pivot = a[[k, k]];
        if pivot.abs() < tolerance {
            return Err(pivot_failure(k, pivot));
        }

        for i in (k + 1)..n {
            let mult = a[[i, k]] / pivot;
            for j in k..n {
                let akj = a[[k, j]];
                a[[i, j]] -= mult * akj;
            }
            let bk = b[k];
            b[i] -= mult * bk;
        }
    }

    // The last pivot is checked here.
    back_substitution_with(&a, &b, tolerance)
}
