//! Dense direct linear solvers
//!
//! This crate provides direct (non-iterative) solvers for small-to-medium
//! dense linear systems `Ax = b`, the kind produced by finite-difference
//! discretizations of boundary value problems and elliptic PDEs:
//!
//! - **LU factorization**: Doolittle (unit lower) and Crout (unit upper)
//!   conventions, no pivoting, plus a partial-pivoting variant
//! - **Triangular substitution**: forward and back substitution as
//!   standalone routines
//! - **One-shot Gaussian elimination**: solves without materializing factors
//! - **Batch solving**: many right-hand sides against one factorization,
//!   optionally in parallel (`parallel` feature)
//! - **Generic scalar types**: works with `f64` and `f32`
//!
//! # Example
//!
//! ```
//! use dense_solvers::{DoolittleLu, residual_norm};
//! use ndarray::array;
//!
//! let a = array![[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
//! let b = array![1.0, 2.0, 3.0];
//!
//! let lu = DoolittleLu::factorize(&a)?;
//! let x = lu.solve(&b)?;
//! assert!(residual_norm(&a, &x, &b) < 1e-12);
//! # Ok::<(), dense_solvers::SolveError>(())
//! ```

pub mod direct;
pub mod error;
pub mod residual;
pub mod traits;

// Re-export main types
pub use error::{Result, SolveError};
pub use residual::{residual, residual_norm};
pub use traits::{LinearSolver, RealScalar};

// Re-export direct solvers
pub use direct::{
    CroutLu, DoolittleLu, PivotedLu, back_substitution, back_substitution_with,
    forward_substitution, forward_substitution_with, gauss_solve, gauss_solve_with, solve_many,
};
