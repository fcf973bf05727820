//! Finite-difference assembly for dense direct solvers
//!
//! Builds the dense coefficient matrix and right-hand side for two
//! classic discretizations, with the known Dirichlet boundary values
//! folded into the right-hand side:
//!
//! - [`bvp`]: the linear two-point boundary value problem
//!   `y'' + p(x)·y' + q(x)·y = r(x)` on a uniform 1-D grid, with a choice
//!   of forward, central or backward differencing
//! - [`laplace`]: the Laplace equation on a rectangle with per-edge
//!   boundary values, discretized by the 5-point stencil
//!
//! Both modules hand the assembled system to
//! [`dense_solvers`](dense_solvers) for the actual solve.

pub mod bvp;
pub mod error;
pub mod laplace;

pub use bvp::{Bvp1d, BvpSolution, DifferenceScheme};
pub use error::AssemblyError;
pub use laplace::{EdgeValues, LaplaceRectangle};
