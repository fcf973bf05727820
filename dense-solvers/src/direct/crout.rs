//! Crout LU factorization (unit upper triangular, no pivoting)

use ndarray::{Array1, Array2};

use crate::direct::substitution::{back_substitution_with, forward_substitution_with};
use crate::direct::{check_rhs, check_square, pivot_failure};
use crate::error::Result;
use crate::traits::{LinearSolver, RealScalar};

/// Default absolute pivot tolerance for the Crout factorization.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-14;

/// LU factorization `A = L·U` with unit diagonal on `U`.
///
/// The Crout convention puts the pivots on `diag(L)` instead of `diag(U)`;
/// the product `L·U` is the same `A` the Doolittle convention reconstructs.
/// Columns of `L` and rows of `U` are built in lockstep: column `j` of `L`
/// first (including the pivot `L[j,j]`), then row `j` of `U` divided by
/// that pivot. No row exchanges are performed.
#[derive(Debug, Clone)]
pub struct CroutLu<T: RealScalar> {
    /// Lower triangular factor, carries the pivots on its diagonal.
    l: Array2<T>,
    /// Upper triangular factor, unit diagonal.
    u: Array2<T>,
    /// Matrix dimension (n x n).
    n: usize,
    /// Pivot tolerance the factorization was built with; reused by `solve`.
    tolerance: T,
}

impl<T: RealScalar> CroutLu<T> {
    /// Factor a square matrix with the default pivot tolerance.
    pub fn factorize(a: &Array2<T>) -> Result<Self> {
        Self::factorize_with(a, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
    }

    /// Factor with an explicit absolute pivot tolerance.
    pub fn factorize_with(a: &Array2<T>, tolerance: T) -> Result<Self> {
        let n = check_square(a)?;

        let mut l = Array2::zeros((n, n));
        let mut u = Array2::eye(n);

        for j in 0..n {
            // Column j of L, pivot L[j,j] included.
            for i in j..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += l[[i, k]] * u[[k, j]];
                }
                l[[i, j]] = a[[i, j]] - sum;
            }

            let pivot = l[[j, j]];
            if pivot.abs() < tolerance {
                return Err(pivot_failure(j, pivot));
            }

            // Row j of U, scaled by the pivot.
            for i in (j + 1)..n {
                let mut sum = T::zero();
                for k in 0..j {
                    sum += l[[j, k]] * u[[k, i]];
                }
                u[[j, i]] = (a[[j, i]] - sum) / pivot;
            }
        }

        Ok(Self { l, u, n, tolerance })
    }

    /// The lower triangular factor (pivots on the diagonal).
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper triangular factor (unit diagonal).
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// Determinant of `A`: product of `diag(L)` (the `U` diagonal is unit).
    pub fn det(&self) -> T {
        let mut d = T::one();
        for i in 0..self.n {
            d *= self.l[[i, i]];
        }
        d
    }

    /// Solve `Ax = b` through the stored factors: `Ly = b`, then `Ux = y`.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_rhs(self.n, b)?;
        let y = forward_substitution_with(&self.l, b, self.tolerance)?;
        // The unit diagonal of U always passes the pivot check.
        back_substitution_with(&self.u, &y, self.tolerance)
    }
}

impl<T: RealScalar> LinearSolver<T> for CroutLu<T> {
    fn dim(&self) -> usize {
        self.n
    }

    fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        CroutLu::solve(self, b)
    }
}
