//! Doolittle LU factorization (unit lower triangular, no pivoting)

use ndarray::{Array1, Array2};

use crate::direct::substitution::{back_substitution_with, forward_substitution_with};
use crate::direct::{check_rhs, check_square, pivot_failure};
use crate::error::Result;
use crate::traits::{LinearSolver, RealScalar};

/// Default absolute pivot tolerance for the Doolittle factorization.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// LU factorization `A = L·U` with unit diagonal on `L`.
///
/// `L` and `U` are stored as separate matrices; `A` is not modified.
/// Pivots are taken in natural diagonal order with no row exchanges, so
/// factorization fails on matrices that need one (see the
/// [module docs](crate::direct)).
#[derive(Debug, Clone)]
pub struct DoolittleLu<T: RealScalar> {
    /// Lower triangular factor, unit diagonal.
    l: Array2<T>,
    /// Upper triangular factor.
    u: Array2<T>,
    /// Matrix dimension (n x n).
    n: usize,
    /// Pivot tolerance the factorization was built with; reused by `solve`.
    tolerance: T,
}

impl<T: RealScalar> DoolittleLu<T> {
    /// Factor a square matrix with the default pivot tolerance.
    ///
    /// ```
    /// use dense_solvers::DoolittleLu;
    /// use ndarray::array;
    ///
    /// let a = array![[2.0_f64, 1.0], [1.0, 4.0]];
    /// let lu = DoolittleLu::factorize(&a).unwrap();
    /// let reconstructed = lu.l().dot(lu.u());
    /// assert!((reconstructed[[1, 0]] - 1.0).abs() < 1e-12);
    /// ```
    pub fn factorize(a: &Array2<T>) -> Result<Self> {
        Self::factorize_with(a, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
    }

    /// Factor with an explicit absolute pivot tolerance.
    pub fn factorize_with(a: &Array2<T>, tolerance: T) -> Result<Self> {
        let n = check_square(a)?;

        // U starts as a copy of A, L as the identity.
        let mut l = Array2::eye(n);
        let mut u = a.clone();

        for k in 0..n.saturating_sub(1) {
            let pivot = u[[k, k]];
            if pivot.abs() < tolerance {
                return Err(pivot_failure(k, pivot));
            }

            for i in (k + 1)..n {
                let mult = u[[i, k]] / pivot;
                l[[i, k]] = mult;

                for j in k..n {
                    let ukj = u[[k, j]];
                    u[[i, j]] -= mult * ukj;
                }
            }
        }

        Ok(Self { l, u, n, tolerance })
    }

    /// The lower triangular factor (unit diagonal).
    pub fn l(&self) -> &Array2<T> {
        &self.l
    }

    /// The upper triangular factor.
    pub fn u(&self) -> &Array2<T> {
        &self.u
    }

    /// Determinant of `A`: product of `diag(U)` (the `L` diagonal is unit).
    pub fn det(&self) -> T {
        let mut d = T::one();
        for i in 0..self.n {
            d *= self.u[[i, i]];
        }
        d
    }

    /// Solve `Ax = b` through the stored factors: `Ly = b`, then `Ux = y`.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        check_rhs(self.n, b)?;
        let y = forward_substitution_with(&self.l, b, self.tolerance)?;
        back_substitution_with(&self.u, &y, self.tolerance)
    }
}

impl<T: RealScalar> LinearSolver<T> for DoolittleLu<T> {
    fn dim(&self) -> usize {
        self.n
    }

    fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        DoolittleLu::solve(self, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_matrix_eq(a: &Array2<f64>, b: &Array2<f64>, tol: f64) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = tol, max_relative = tol);
        }
    }

    #[test]
    fn test_unit_lower_diagonal() {
        let a = array![[2.0_f64, 1.0, 1.0], [4.0, 3.0, 3.0], [8.0, 7.0, 9.0]];
        let lu = DoolittleLu::factorize(&a).unwrap();

        for i in 0..3 {
            assert_eq!(lu.l()[[i, i]], 1.0);
            for j in (i + 1)..3 {
                assert_eq!(lu.l()[[i, j]], 0.0);
            }
            for j in 0..i {
                assert_eq!(lu.u()[[i, j]], 0.0);
            }
        }
    }

    #[test]
    fn test_reconstructs_a() {
        let a = array![
            [21.0_f64, 67.0, 88.0, 73.0],
            [76.0, 63.0, 70.0, 20.0],
            [0.0, 85.0, 560.0, 54.0],
            [193.0, 43.0, 30.2, 29.4]
        ];
        let lu = DoolittleLu::factorize(&a).unwrap();
        let product = lu.l().dot(lu.u());
        assert_matrix_eq(&product, &a, 1e-9);
    }

    #[test]
    fn test_solve_3x3() {
        // 2x + y = 5; x + 4y + z = 8; y + 3z = 5 => x = 2, y = 1, z = 4/3
        let a = array![[2.0_f64, 1.0, 0.0], [1.0, 4.0, 1.0], [0.0, 1.0, 3.0]];
        let b = array![5.0_f64, 22.0 / 3.0, 5.0];
        let lu = DoolittleLu::factorize(&a).unwrap();
        let x = lu.solve(&b).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_det() {
        // det([[2,1],[1,4]]) = 7
        let a = array![[2.0_f64, 1.0], [1.0, 4.0]];
        let lu = DoolittleLu::factorize(&a).unwrap();
        assert_relative_eq!(lu.det(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_pivot_is_error_not_nan() {
        // Needs a row exchange; the no-pivot path must refuse it.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let err = DoolittleLu::factorize(&a).unwrap_err();
        assert!(matches!(err, SolveError::SingularPivot { step: 0, .. }));
    }

    #[test]
    fn test_singular_matrix_fails_at_solve() {
        // U[1,1] becomes zero during elimination; the last pivot is only
        // used (and checked) by back substitution, so factorization
        // succeeds and the solve reports the failure.
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        let lu = DoolittleLu::factorize(&a).unwrap();
        let err = lu.solve(&array![1.0_f64, 2.0]).unwrap_err();
        assert!(matches!(err, SolveError::SingularPivot { step: 1, .. }));
    }

    #[test]
    fn test_one_by_one() {
        let a = array![[5.0_f64]];
        let b = array![10.0_f64];
        let lu = DoolittleLu::factorize(&a).unwrap();
        let x = lu.solve(&b).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_multiple_rhs_same_factorization() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let lu = DoolittleLu::factorize(&a).unwrap();

        for b in [array![1.0_f64, 2.0, 3.0], array![4.0_f64, 5.0, 6.0]] {
            let x = lu.solve(&b).unwrap();
            let ax = a.dot(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_not_square() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            DoolittleLu::factorize(&a),
            Err(SolveError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_f32_scalar() {
        let a = array![[2.0_f32, 1.0], [1.0, 4.0]];
        let b = array![5.0_f32, 6.0];
        let lu = DoolittleLu::factorize(&a).unwrap();
        let x = lu.solve(&b).unwrap();
        assert_relative_eq!(x[0], 2.0_f32, epsilon = 1e-5);
        assert_relative_eq!(x[1], 1.0_f32, epsilon = 1e-5);
    }
}
