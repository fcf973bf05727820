//! 1-D two-point boundary value problems
//!
//! Discretizes the linear BVP
//!
//! ```text
//! y'' + p(x)·y' + q(x)·y = r(x),   y(x0) = ya,  y(x1) = yb
//! ```
//!
//! on a uniform grid with step `h`. Each interior node contributes one row
//! of a dense system over the interior unknowns; stencil legs that land on
//! a boundary node are moved to the right-hand side with the known
//! boundary value. The assembled matrix is tridiagonal for the central
//! scheme and banded for the one-sided schemes, but is stored dense
//! because the downstream solver is dense.

use dense_solvers::DoolittleLu;
use ndarray::{Array1, Array2};

use crate::error::AssemblyError;

/// Finite-difference approximation used for the derivatives.
///
/// Central differencing is second-order accurate and produces a
/// diagonally dominant tridiagonal system for well-behaved coefficients;
/// the one-sided schemes are first-order and kept for comparison studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferenceScheme {
    /// `y' ≈ (y_{i+1} − y_i)/h`, `y'' ≈ (y_{i+2} − 2y_{i+1} + y_i)/h²`
    Forward,
    /// `y' ≈ (y_{j+1} − y_{j−1})/(2h)`, `y'' ≈ (y_{j+1} − 2y_j + y_{j−1})/h²`
    Central,
    /// `y' ≈ (y_j − y_{j−1})/h`, `y'' ≈ (y_j − 2y_{j−1} + y_{j−2})/h²`
    Backward,
}

/// A linear two-point boundary value problem with Dirichlet ends.
pub struct Bvp1d {
    p: Box<dyn Fn(f64) -> f64>,
    q: Box<dyn Fn(f64) -> f64>,
    r: Box<dyn Fn(f64) -> f64>,
    x0: f64,
    x1: f64,
    ya: f64,
    yb: f64,
}

impl std::fmt::Debug for Bvp1d {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bvp1d")
            .field("domain", &(self.x0, self.x1))
            .field("boundary", &(self.ya, self.yb))
            .finish()
    }
}

/// Solution of a BVP on the full grid, boundary nodes included.
#[derive(Debug, Clone)]
pub struct BvpSolution {
    /// Grid abscissae `x0, x0 + h, ..., x1`.
    pub x: Vec<f64>,
    /// Solution values at the grid abscissae; `y[0] = ya`, `y[N] = yb`.
    pub y: Vec<f64>,
}

impl Bvp1d {
    /// Define the problem `y'' + p·y' + q·y = r` on `domain` with
    /// boundary values `(ya, yb)` at the two ends.
    pub fn new<P, Q, R>(domain: (f64, f64), boundary: (f64, f64), p: P, q: Q, r: R) -> Self
    where
        P: Fn(f64) -> f64 + 'static,
        Q: Fn(f64) -> f64 + 'static,
        R: Fn(f64) -> f64 + 'static,
    {
        Self {
            p: Box::new(p),
            q: Box::new(q),
            r: Box::new(r),
            x0: domain.0,
            x1: domain.1,
            ya: boundary.0,
            yb: boundary.1,
        }
    }

    /// Build the uniform grid for step `h`, boundary nodes included.
    pub fn grid(&self, h: f64) -> Result<Vec<f64>, AssemblyError> {
        let span = self.x1 - self.x0;
        if h <= 0.0 || !h.is_finite() {
            return Err(AssemblyError::StepMismatch {
                h,
                x0: self.x0,
                x1: self.x1,
            });
        }
        let intervals = (span / h).round();
        if intervals < 1.0 || (intervals * h - span).abs() > 1e-9 * span.abs().max(1.0) {
            return Err(AssemblyError::StepMismatch {
                h,
                x0: self.x0,
                x1: self.x1,
            });
        }
        let intervals = intervals as usize;
        if intervals < 2 {
            return Err(AssemblyError::TooCoarse { intervals });
        }
        Ok((0..=intervals).map(|i| self.x0 + i as f64 * h).collect())
    }

    /// Assemble the dense interior system `A·y = b` for step `h`.
    pub fn assemble(
        &self,
        h: f64,
        scheme: DifferenceScheme,
    ) -> Result<(Array2<f64>, Array1<f64>), AssemblyError> {
        let grid = self.grid(h)?;
        let n = grid.len() - 1; // last node index
        let m = n - 1; // interior unknowns

        let mut a = Array2::zeros((m, m));
        let mut b = Array1::zeros(m);

        let h2 = h * h;

        for row in 0..m {
            // (node index, coefficient) legs of this row's stencil, plus
            // the source term. Node indices may land on either boundary.
            let mut legs = [(0_i64, 0.0_f64); 3];
            let rhs;

            match scheme {
                DifferenceScheme::Central => {
                    let j = row + 1;
                    let xj = grid[j];
                    legs[0] = (j as i64 - 1, 1.0 / h2 - (self.p)(xj) / (2.0 * h));
                    legs[1] = (j as i64, -2.0 / h2 + (self.q)(xj));
                    legs[2] = (j as i64 + 1, 1.0 / h2 + (self.p)(xj) / (2.0 * h));
                    rhs = (self.r)(xj);
                }
                DifferenceScheme::Forward => {
                    let i = row;
                    let xi = grid[i];
                    legs[0] = (i as i64, 1.0 / h2 - (self.p)(xi) / h + (self.q)(xi));
                    legs[1] = (i as i64 + 1, -2.0 / h2 + (self.p)(xi) / h);
                    legs[2] = (i as i64 + 2, 1.0 / h2);
                    rhs = (self.r)(xi);
                }
                DifferenceScheme::Backward => {
                    let j = row + 1;
                    let xj = grid[j];
                    legs[0] = (j as i64 - 2, 1.0 / h2);
                    legs[1] = (j as i64 - 1, -2.0 / h2 - (self.p)(xj) / h);
                    legs[2] = (j as i64, 1.0 / h2 + (self.p)(xj) / h + (self.q)(xj));
                    rhs = (self.r)(xj);
                }
            }

            for &(node, coeff) in &legs {
                if node >= 1 && node <= (n as i64 - 1) {
                    a[[row, node as usize - 1]] += coeff;
                } else if node <= 0 {
                    b[row] -= coeff * self.ya;
                } else {
                    b[row] -= coeff * self.yb;
                }
            }
            b[row] += rhs;
        }

        log::debug!(
            "assembled {m}x{m} {scheme:?}-difference system on [{}, {}], h = {h}",
            self.x0,
            self.x1
        );
        Ok((a, b))
    }

    /// Assemble and solve, returning the solution on the full grid.
    pub fn solve(&self, h: f64, scheme: DifferenceScheme) -> Result<BvpSolution, AssemblyError> {
        let grid = self.grid(h)?;
        let (a, b) = self.assemble(h, scheme)?;
        let interior = DoolittleLu::factorize(&a)?.solve(&b)?;

        let mut y = Vec::with_capacity(grid.len());
        y.push(self.ya);
        y.extend(interior.iter().copied());
        y.push(self.yb);

        Ok(BvpSolution { x: grid, y })
    }
}
