//! Triangular substitution
//!
//! Standalone forward and back substitution for lower- and
//! upper-triangular systems. The diagonal is not assumed to be unit;
//! every diagonal entry is checked against the pivot tolerance before it
//! is used as a divisor.

use ndarray::{Array1, Array2};

use crate::direct::{check_rhs, check_square, pivot_failure};
use crate::error::Result;
use crate::traits::RealScalar;

/// Default absolute pivot tolerance for the substitution routines.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Solve `Ly = b` for lower-triangular `L`, top to bottom.
///
/// Entries above the diagonal are ignored. Fails with
/// [`crate::SolveError::SingularPivot`] when a diagonal entry falls below
/// the default tolerance.
pub fn forward_substitution<T: RealScalar>(l: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    forward_substitution_with(l, b, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
}

/// [`forward_substitution`] with an explicit absolute pivot tolerance.
pub fn forward_substitution_with<T: RealScalar>(
    l: &Array2<T>,
    b: &Array1<T>,
    tolerance: T,
) -> Result<Array1<T>> {
    let n = check_square(l)?;
    check_rhs(n, b)?;

    let mut y = Array1::zeros(n);
    for i in 0..n {
        let mut sum = T::zero();
        for k in 0..i {
            sum += l[[i, k]] * y[k];
        }
        let diag = l[[i, i]];
        if diag.abs() < tolerance {
            return Err(pivot_failure(i, diag));
        }
        y[i] = (b[i] - sum) / diag;
    }
    Ok(y)
}

/// Solve `Ux = y` for upper-triangular `U`, bottom to top.
///
/// Entries below the diagonal are ignored. Same pivot check as
/// [`forward_substitution`].
pub fn back_substitution<T: RealScalar>(u: &Array2<T>, y: &Array1<T>) -> Result<Array1<T>> {
    back_substitution_with(u, y, T::from_f64(DEFAULT_PIVOT_TOLERANCE).unwrap())
}

/// [`back_substitution`] with an explicit absolute pivot tolerance.
pub fn back_substitution_with<T: RealScalar>(
    u: &Array2<T>,
    y: &Array1<T>,
    tolerance: T,
) -> Result<Array1<T>> {
    let n = check_square(u)?;
    check_rhs(n, y)?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for k in (i + 1)..n {
            sum += u[[i, k]] * x[k];
        }
        let diag = u[[i, i]];
        if diag.abs() < tolerance {
            return Err(pivot_failure(i, diag));
        }
        x[i] = (y[i] - sum) / diag;
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_lower_triangular() {
        // 2y0 = 4; y0 + 3y1 = 5 => y = [2, 1]
        let l = array![[2.0_f64, 0.0], [1.0, 3.0]];
        let b = array![4.0_f64, 5.0];
        let y = forward_substitution(&l, &b).unwrap();
        assert_relative_eq!(y[0], 2.0, epsilon = 1e-14);
        assert_relative_eq!(y[1], 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_back_upper_triangular() {
        // 2x0 + x1 = 5; 4x1 = 4 => x = [2, 1]
        let u = array![[2.0_f64, 1.0], [0.0, 4.0]];
        let y = array![5.0_f64, 4.0];
        let x = back_substitution(&u, &y).unwrap();
        assert_relative_eq!(x[0], 2.0, epsilon = 1e-14);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_one_by_one_system() {
        // [a] x = [b] degenerates to x = b / a in both directions
        let m = array![[4.0_f64]];
        let b = array![6.0_f64];

        let y = forward_substitution(&m, &b).unwrap();
        assert_relative_eq!(y[0], 1.5, epsilon = 1e-15);

        let x = back_substitution(&m, &b).unwrap();
        assert_relative_eq!(x[0], 1.5, epsilon = 1e-15);
    }

    #[test]
    fn test_non_unit_diagonal() {
        let l = array![[3.0_f64, 0.0, 0.0], [1.0, 2.0, 0.0], [2.0, 1.0, 5.0]];
        let b = array![6.0_f64, 4.0, 14.0];
        let y = forward_substitution(&l, &b).unwrap();
        // y0 = 2, y1 = (4 - 2)/2 = 1, y2 = (14 - 4 - 1)/5 = 1.8
        assert_relative_eq!(y[0], 2.0, epsilon = 1e-14);
        assert_relative_eq!(y[1], 1.0, epsilon = 1e-14);
        assert_relative_eq!(y[2], 1.8, epsilon = 1e-14);
    }

    #[test]
    fn test_zero_diagonal_fails() {
        let l = array![[0.0_f64, 0.0], [1.0, 1.0]];
        let b = array![1.0_f64, 1.0];
        let err = forward_substitution(&l, &b).unwrap_err();
        assert!(matches!(err, SolveError::SingularPivot { step: 0, .. }));

        let u = array![[1.0_f64, 1.0], [0.0, 0.0]];
        let err = back_substitution(&u, &b).unwrap_err();
        assert!(matches!(err, SolveError::SingularPivot { step: 1, .. }));
    }

    #[test]
    fn test_explicit_tolerance() {
        // A diagonal entry of 1e-13 passes at tolerance 1e-14 and fails
        // at the default 1e-12.
        let l = array![[1e-13_f64, 0.0], [1.0, 1.0]];
        let b = array![1.0_f64, 1.0];
        assert!(forward_substitution(&l, &b).is_err());
        assert!(forward_substitution_with(&l, &b, 1e-14).is_ok());
    }

    #[test]
    fn test_dimension_checks() {
        let l = array![[1.0_f64, 0.0], [1.0, 1.0]];
        let b = array![1.0_f64, 2.0, 3.0];
        assert!(matches!(
            forward_substitution(&l, &b),
            Err(SolveError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        ));

        let rect = array![[1.0_f64, 0.0, 0.0], [1.0, 1.0, 0.0]];
        let b2 = array![1.0_f64, 2.0];
        assert!(matches!(
            forward_substitution(&rect, &b2),
            Err(SolveError::NotSquare { rows: 2, cols: 3 })
        ));
    }
}
