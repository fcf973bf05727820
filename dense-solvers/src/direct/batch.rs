//! Batch solving against a shared factorization
//!
//! Factorizations are read-only after construction, so independent
//! right-hand sides can be solved concurrently against the same factors.
//! With the `parallel` feature the batch is distributed over rayon's
//! thread pool; without it the solves run sequentially.

use ndarray::Array1;

use crate::error::Result;
use crate::traits::{LinearSolver, RealScalar};

/// Solve `A x_k = b_k` for every right-hand side in `rhs` against one
/// factorization. Fails on the first pivot or dimension error.
#[cfg(feature = "parallel")]
pub fn solve_many<T, S>(solver: &S, rhs: &[Array1<T>]) -> Result<Vec<Array1<T>>>
where
    T: RealScalar,
    S: LinearSolver<T> + Sync,
{
    use rayon::prelude::*;
    rhs.par_iter().map(|b| solver.solve(b)).collect()
}

/// Solve `A x_k = b_k` for every right-hand side in `rhs` against one
/// factorization. Fails on the first pivot or dimension error.
#[cfg(not(feature = "parallel"))]
pub fn solve_many<T, S>(solver: &S, rhs: &[Array1<T>]) -> Result<Vec<Array1<T>>>
where
    T: RealScalar,
    S: LinearSolver<T> + Sync,
{
    rhs.iter().map(|b| solver.solve(b)).collect()
}
