//! Validation of assembled systems against independently known results
//!
//! The 1-D BVP profile is checked for the qualitative behavior the
//! analytical solution has (smooth, monotonic between its boundary
//! values) and for a small residual; the heated-plate problem is checked
//! against the values the over-relaxed Gauss-Seidel iteration converges
//! to on the same grid.

use approx::assert_relative_eq;
use dense_solvers::{gauss_solve, residual_norm, DoolittleLu};
use fd_assembly::{Bvp1d, DifferenceScheme, EdgeValues, LaplaceRectangle};

fn reference_bvp() -> Bvp1d {
    // y'' + x·y' − x·y = 2x, y(0) = 1, y(2) = 8
    Bvp1d::new((0.0, 2.0), (1.0, 8.0), |x| x, |x| -x, |x| 2.0 * x)
}

#[test]
fn coarse_bvp_profile_is_smooth_and_monotonic() {
    let sol = reference_bvp().solve(0.5, DifferenceScheme::Central).unwrap();

    // Boundary values imposed exactly, interior rising between them.
    assert_eq!(sol.y.len(), 5);
    assert_relative_eq!(sol.y[0], 1.0, epsilon = 1e-15);
    assert_relative_eq!(sol.y[4], 8.0, epsilon = 1e-15);
    for w in sol.y.windows(2) {
        assert!(w[1] > w[0], "profile must increase monotonically: {:?}", sol.y);
    }
}

#[test]
fn coarse_bvp_interior_satisfies_the_assembled_system() {
    let bvp = reference_bvp();
    let (a, b) = bvp.assemble(0.5, DifferenceScheme::Central).unwrap();
    let x = DoolittleLu::factorize(&a).unwrap().solve(&b).unwrap();
    assert!(residual_norm(&a, &x, &b) < 1e-12);
}

#[test]
fn fine_grid_refines_the_coarse_solution() {
    let bvp = reference_bvp();
    let coarse = bvp.solve(0.5, DifferenceScheme::Central).unwrap();
    let fine = bvp.solve(0.01, DifferenceScheme::Central).unwrap();

    // The coarse nodes are a subset of the fine grid; the two solutions
    // should agree there to the coarse grid's discretization accuracy.
    for (k, &xk) in coarse.x.iter().enumerate() {
        let fine_idx = (xk / 0.01).round() as usize;
        assert_relative_eq!(coarse.y[k], fine.y[fine_idx], max_relative = 0.1);
    }
}

#[test]
fn heated_plate_matches_relaxation_result() {
    // Same system the original analysis solves both directly and by SOR:
    // interior temperatures 31.25, 25, 50, 43.75.
    let plate = LaplaceRectangle::new(
        2,
        2,
        EdgeValues {
            left: 50.0,
            right: 25.0,
            bottom: 0.0,
            top: 75.0,
        },
    );
    let u = plate.solve().unwrap();
    let expected = [31.25, 25.0, 50.0, 43.75];
    for (v, e) in u.iter().zip(expected.iter()) {
        assert_relative_eq!(*v, *e, epsilon = 1e-10);
    }

    // The Crout path and the one-shot elimination agree on the same system.
    let (a, b) = plate.assemble().unwrap();
    let via_gauss = gauss_solve(&a, &b).unwrap();
    for (v, e) in via_gauss.iter().zip(u.iter()) {
        assert_relative_eq!(*v, *e, epsilon = 1e-12);
    }
}

#[test]
fn larger_interior_grid_stays_well_conditioned() {
    // A 10x10 interior grid gives a 100-unknown stencil system; the
    // no-pivot path must factor it without incident.
    let plate = LaplaceRectangle::new(
        10,
        10,
        EdgeValues {
            left: 50.0,
            right: 25.0,
            bottom: 0.0,
            top: 75.0,
        },
    );
    let (a, b) = plate.assemble().unwrap();
    let u = plate.solve().unwrap();
    assert!(residual_norm(&a, &u, &b) < 1e-9);
}
