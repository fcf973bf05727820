//! 2-D Laplace equation on a rectangle, 5-point stencil
//!
//! Discretizes `∇²u = 0` with Dirichlet edge values on an `m × n` grid of
//! interior nodes. Each interior node gets the stencil
//! `4·u_ij − u_{i−1,j} − u_{i+1,j} − u_{i,j−1} − u_{i,j+1} = 0`; stencil
//! legs that reach an edge move the known edge value to the right-hand
//! side. Interior nodes are numbered row-major, `p = (j−1)·m + (i−1)` for
//! interior coordinates `i = 1..=m`, `j = 1..=n`.

use dense_solvers::CroutLu;
use ndarray::{Array1, Array2};

use crate::error::AssemblyError;

/// Dirichlet values on the four edges of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeValues {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Laplace problem on a rectangle with an `m × n` interior grid.
#[derive(Debug, Clone, Copy)]
pub struct LaplaceRectangle {
    /// Interior nodes per row (x direction).
    pub interior_cols: usize,
    /// Interior nodes per column (y direction).
    pub interior_rows: usize,
    /// Edge boundary values.
    pub edges: EdgeValues,
}

impl LaplaceRectangle {
    pub fn new(interior_cols: usize, interior_rows: usize, edges: EdgeValues) -> Self {
        Self {
            interior_cols,
            interior_rows,
            edges,
        }
    }

    /// Row-major index of interior node `(i, j)`, both 1-based.
    fn node_index(&self, i: usize, j: usize) -> usize {
        (j - 1) * self.interior_cols + (i - 1)
    }

    /// Assemble the dense system `A·u = b` over the interior nodes.
    pub fn assemble(&self) -> Result<(Array2<f64>, Array1<f64>), AssemblyError> {
        let m = self.interior_cols;
        let n = self.interior_rows;
        if m == 0 || n == 0 {
            return Err(AssemblyError::EmptyInterior { cols: m, rows: n });
        }

        let unknowns = m * n;
        let mut a = Array2::zeros((unknowns, unknowns));
        let mut b = Array1::zeros(unknowns);

        for j in 1..=n {
            for i in 1..=m {
                let p = self.node_index(i, j);
                a[[p, p]] = 4.0;

                // Left neighbor (i-1, j)
                if i > 1 {
                    a[[p, self.node_index(i - 1, j)]] = -1.0;
                } else {
                    b[p] += self.edges.left;
                }

                // Right neighbor (i+1, j)
                if i < m {
                    a[[p, self.node_index(i + 1, j)]] = -1.0;
                } else {
                    b[p] += self.edges.right;
                }

                // Bottom neighbor (i, j-1)
                if j > 1 {
                    a[[p, self.node_index(i, j - 1)]] = -1.0;
                } else {
                    b[p] += self.edges.bottom;
                }

                // Top neighbor (i, j+1)
                if j < n {
                    a[[p, self.node_index(i, j + 1)]] = -1.0;
                } else {
                    b[p] += self.edges.top;
                }
            }
        }

        log::debug!("assembled {unknowns}x{unknowns} Laplace system ({m}x{n} interior grid)");
        Ok((a, b))
    }

    /// Assemble and solve; returns the interior values in row-major order.
    ///
    /// The stencil matrix is diagonally dominant, so the no-pivot Crout
    /// path is safe here.
    pub fn solve(&self) -> Result<Array1<f64>, AssemblyError> {
        let (a, b) = self.assemble()?;
        let x = CroutLu::factorize(&a)?.solve(&b)?;
        Ok(x)
    }

    /// Interior value at `(i, j)` (1-based) from a solution vector.
    pub fn value_at(&self, solution: &Array1<f64>, i: usize, j: usize) -> f64 {
        solution[self.node_index(i, j)]
    }
}
