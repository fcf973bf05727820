//! Core traits for the solver library
//!
//! - [`RealScalar`]: scalar types the solvers are generic over
//! - [`LinearSolver`]: anything that can solve `Ax = b` for a fixed `A`

use ndarray::Array1;
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

use crate::error::Result;

/// Trait for real scalar types usable in the solver routines.
///
/// Implemented for `f64` (the reference precision) and `f32` via the
/// blanket impl. Complex systems are out of scope for this crate.
pub trait RealScalar:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
}

impl<T> RealScalar for T where
    T: Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
}

/// A factorized (or otherwise prepared) system that can be solved against
/// arbitrary right-hand sides.
///
/// Factorizations are immutable once built, so sharing one across threads
/// and solving several right-hand sides concurrently is safe; see
/// [`crate::direct::solve_many`].
pub trait LinearSolver<T: RealScalar> {
    /// System dimension `n`.
    fn dim(&self) -> usize;

    /// Solve `Ax = b` for the system this value was built from.
    fn solve(&self, b: &Array1<T>) -> Result<Array1<T>>;
}
