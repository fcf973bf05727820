//! Error types for the dense solvers.

use thiserror::Error;

/// Errors that can occur during factorization or substitution.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// A pivot magnitude fell below the tolerance. Fatal to the current
    /// solve: no reordering is attempted and no partial result is returned.
    #[error("singular or near-singular pivot at step {step}: |pivot| = {magnitude:.3e}")]
    SingularPivot {
        /// Elimination or substitution step at which the pivot failed
        step: usize,
        /// Magnitude of the offending pivot
        magnitude: f64,
    },

    /// The coefficient matrix is not square.
    #[error("matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// A vector length does not match the system dimension.
    #[error("dimension mismatch: system is {expected}x{expected}, vector has length {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolveError>;
