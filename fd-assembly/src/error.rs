//! Error types for the assembly crate.

use dense_solvers::SolveError;
use thiserror::Error;

/// Errors from grid construction, assembly, or the downstream solve.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The step size does not divide the domain into whole intervals.
    #[error("step size {h} does not divide [{x0}, {x1}] into whole intervals")]
    StepMismatch { h: f64, x0: f64, x1: f64 },

    /// The grid has no interior unknowns to solve for.
    #[error("grid too coarse: {intervals} interval(s) leave no interior nodes")]
    TooCoarse { intervals: usize },

    /// The interior grid of a 2-D problem is empty.
    #[error("empty interior grid: {cols} x {rows}")]
    EmptyInterior { cols: usize, rows: usize },

    /// The dense solve failed (singular or near-singular pivot).
    #[error(transparent)]
    Solve(#[from] SolveError),
}
