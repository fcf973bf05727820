//! LU factorization with partial pivoting
//!
//! The robust variant of the no-pivot family: decomposes `PA = LU` where
//! `P` is a row permutation chosen so each pivot is the largest remaining
//! entry in its column. Handles matrices the no-pivot paths reject (e.g. a
//! zero leading pivot above a nonzero entry), at the cost of results that
//! differ from the no-pivot family by rounding.

use ndarray::{Array1, Array2};

use crate::direct::{check_rhs, check_square, pivot_failure};
use crate::error::Result;
use crate::traits::{LinearSolver, RealScalar};

/// Default absolute pivot tolerance for the pivoted factorization.
/// With row exchanges in play, a pivot this small means the whole
/// remaining column is negligible and the matrix is effectively singular.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// LU factorization with partial pivoting, `PA = LU`, packed storage.
///
/// `L` (unit diagonal, implicit) occupies the strict lower triangle and
/// `U` the upper triangle of one matrix. The permutation is a row index
/// vector: row `i` of `PA` is row `perm[i]` of `A`.
#[derive(Debug, Clone)]
pub struct PivotedLu<T: RealScalar> {
    /// Packed LU matrix.
    lu: Array2<T>,
    /// Row permutation: row `i` of `PA` is row `perm[i]` of `A`.
    perm: Vec<usize>,
    /// Matrix dimension (n x n).
    n: usize,
    /// Sign of the permutation (+1 or -1), for the determinant.
    sign: T,
}

impl<T: RealScalar> PivotedLu<T> {
    /// Factor a square matrix with the default pivot tolerance.
    pub fn factorize(a: &Array2<T>) -> Result<Self> {
        Self::factorize_with(a, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
    }

    /// Factor with an explicit absolute pivot tolerance.
    pub fn factorize_with(a: &Array2<T>, tolerance: T) -> Result<Self> {
        let n = check_square(a)?;

        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = T::one();

        for k in 0..n {
            // Largest |lu[i, k]| for i >= k becomes the pivot.
            let mut max_val = lu[[k, k]].abs();
            let mut max_row = k;
            for i in (k + 1)..n {
                let val = lu[[i, k]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = i;
                }
            }

            if max_val < tolerance {
                return Err(pivot_failure(k, lu[[k, k]]));
            }

            if max_row != k {
                log::debug!("partial pivoting: swapping rows {k} and {max_row}");
                for j in 0..n {
                    let tmp = lu[[k, j]];
                    lu[[k, j]] = lu[[max_row, j]];
                    lu[[max_row, j]] = tmp;
                }
                perm.swap(k, max_row);
                sign = -sign;
            }

            let pivot = lu[[k, k]];
            for i in (k + 1)..n {
                let mult = lu[[i, k]] / pivot;
                lu[[i, k]] = mult; // store the L factor

                for j in (k + 1)..n {
                    let ukj = lu[[k, j]];
                    lu[[i, j]] -= mult * ukj;
                }
            }
        }

        Ok(Self { lu, perm, n, sign })
    }

    /// Extract the lower triangular factor `L` (unit diagonal).
    pub fn l(&self) -> Array2<T> {
        let mut l = Array2::eye(self.n);
        for i in 0..self.n {
            for j in 0..i {
                l[[i, j]] = self.lu[[i, j]];
            }
        }
        l
    }

    /// Extract the upper triangular factor `U`.
    pub fn u(&self) -> Array2<T> {
        let mut u = Array2::zeros((self.n, self.n));
        for i in 0..self.n {
            for j in i..self.n {
                u[[i, j]] = self.lu[[i, j]];
            }
        }
        u
    }

    /// The row permutation: row `i` of `PA` is row `perm[i]` of `A`.
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Determinant of `A`: permutation sign times the product of `diag(U)`.
    pub fn det(&self) -> T {
        let mut d = self.sign;
        for i in 0..self.n {
            d *= self.lu[[i, i]];
        }
        d
    }

    /// Solve `Ax = b` using the stored factorization.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_rhs(self.n, b)?;
        let n = self.n;

        // x = Pb
        let mut x = Array1::zeros(n);
        for (i, &pi) in self.perm.iter().enumerate() {
            x[i] = b[pi];
        }

        // Forward substitution Ly = Pb; diag(L) is implicit unit.
        for i in 1..n {
            let mut sum = T::zero();
            for j in 0..i {
                sum += self.lu[[i, j]] * x[j];
            }
            x[i] -= sum;
        }

        // Back substitution Ux = y; every pivot was checked at
        // factorization time.
        for i in (0..n).rev() {
            let mut sum = T::zero();
            for j in (i + 1)..n {
                sum += self.lu[[i, j]] * x[j];
            }
            x[i] = (x[i] - sum) / self.lu[[i, i]];
        }

        Ok(x)
    }
}

impl<T: RealScalar> LinearSolver<T> for PivotedLu<T> {
    fn dim(&self) -> usize {
        self.n
    }

    fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        PivotedLu::solve(self, b)
    }
}
