//! Direct solvers for dense linear systems
//!
//! - [`DoolittleLu`]: LU factorization with unit diagonal on `L`
//! - [`CroutLu`]: LU factorization with unit diagonal on `U`
//! - [`gauss_solve`]: one-shot Gaussian elimination, no factors retained
//! - [`forward_substitution`] / [`back_substitution`]: triangular solves
//! - [`PivotedLu`]: partial-pivoting variant
//! - [`solve_many`]: batch solving against one factorization
//!
//! # Pivoting
//!
//! The Doolittle, Crout and Gaussian-elimination paths take pivots in
//! natural diagonal order and never exchange rows. A matrix that needs a
//! row swap (e.g. a zero leading pivot above a nonzero entry) fails with
//! [`SolveError::SingularPivot`] even though it is nonsingular. Use
//! [`PivotedLu`] for such systems; its results differ from the no-pivot
//! family by rounding only.
//!
//! # Tolerances
//!
//! Pivot checks compare against a fixed absolute threshold. Each entry
//! point has a default-tolerance form and a `*_with` form taking an
//! explicit tolerance; the defaults (`1e-12`, and `1e-14` for Crout)
//! match the reference finite-difference and PDE assembly call sites.

mod batch;
mod crout;
mod doolittle;
mod gauss;
mod pivoted;
mod substitution;

pub use batch::solve_many;
pub use crout::CroutLu;
pub use doolittle::DoolittleLu;
pub use gauss::{gauss_solve, gauss_solve_with};
pub use pivoted::PivotedLu;
pub use substitution::{
    back_substitution, back_substitution_with, forward_substitution, forward_substitution_with,
};

use ndarray::{Array1, Array2};

use crate::error::{Result, SolveError};
use crate::traits::RealScalar;

/// Require a square matrix, returning its dimension.
pub(crate) fn check_square<T>(a: &Array2<T>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolveError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Require a right-hand side of length `n`.
pub(crate) fn check_rhs<T>(n: usize, b: &Array1<T>) -> Result<()> {
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(())
}

/// Build the pivot-failure error for step `step`.
pub(crate) fn pivot_failure<T: RealScalar>(step: usize, pivot: T) -> SolveError {
    SolveError::SingularPivot {
        step,
        magnitude: pivot.abs().to_f64().unwrap_or(f64::NAN),
    }
}
