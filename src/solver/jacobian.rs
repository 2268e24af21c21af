//! Analytic Jacobian assembly.
//!
//! Mirrors the residual's dependency graph for the `none` and `centered`
//! limiters. The van Leer correction is not differentiated; requesting it on
//! the Jacobian side fails with [`JacobianError::UnsupportedLimiter`] before
//! any assembly. This is a stated capability split, not something to
//! approximate: callers wanting van Leer in the linearization should use a
//! finite-difference outer solver and skip this evaluator entirely.
//!
//! Each worker produces a list of (row, col, value) contributions for its
//! owned rows; [`finalize_jacobian`] is the collective step summing every
//! worker's list into a freshly zeroed matrix. Contributions accumulate,
//! never overwrite, and a prior matrix is never reused.
//!
//! For the supported limiters the coefficients do not depend on the current
//! iterate, but the matrix is still rebuilt from scratch on every evaluation;
//! other limiter choices would make the entries solution-dependent.

use faer::Mat;
use thiserror::Error;

use crate::equations::{AdvectionDiffusion1D, WindModel};
use crate::flux::FluxLimiter;
use crate::mesh::{Grid1D, LocalSolution};

/// Error type for Jacobian evaluation.
#[derive(Debug, Error)]
pub enum JacobianError {
    /// The requested limiter has no implemented derivative.
    #[error("Jacobian for {0} limiter is not implemented")]
    UnsupportedLimiter(FluxLimiter),
}

/// One worker's sparse Jacobian contributions.
///
/// Interior rows carry at most 5 nonzeros (self, the two neighbors, and the
/// two extra cross-terms of the centered correction); boundary rows carry 1.
/// Entries zeroed against boundary-fixed columns are recorded explicitly so
/// the sparsity structure is independent of the wind sign. Zeroing those
/// columns drops one coupling the residual retains (the downwind value at
/// the leftmost face under leftward wind is the boundary iterate); the
/// boundary row pins that unknown, so the Newton root is unchanged.
#[derive(Clone, Debug)]
pub struct JacobianTriplets {
    n: usize,
    entries: Vec<(usize, usize, f64)>,
}

impl JacobianTriplets {
    /// Empty contribution list for an n-by-n system.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            entries: Vec::new(),
        }
    }

    /// Record a contribution; duplicates accumulate at finalize.
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.n && col < self.n);
        self.entries.push((row, col, value));
    }

    /// System dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The recorded (row, col, value) contributions.
    pub fn entries(&self) -> &[(usize, usize, f64)] {
        &self.entries
    }
}

/// Assemble one worker's Jacobian contributions for its owned rows.
///
/// Takes the same extended solution view as the residual evaluator, though
/// for the supported limiters no value of the iterate enters the
/// coefficients.
pub fn assemble_jacobian<W: WindModel>(
    grid: &Grid1D,
    u: &LocalSolution,
    problem: &AdvectionDiffusion1D<W>,
    limiter: FluxLimiter,
) -> Result<JacobianTriplets, JacobianError> {
    if limiter == FluxLimiter::VanLeer {
        return Err(JacobianError::UnsupportedLimiter(limiter));
    }

    let n = grid.n_points();
    let h = grid.spacing();
    let eps = problem.eps();
    let scdiag = 2.0 * eps / h + 1.0;
    let range = u.range();

    let mut tri = JacobianTriplets::new(n);
    for i in range.iter() {
        if grid.is_boundary(i) {
            tri.add(i, i, scdiag);
            continue;
        }

        // Diffusive part: tridiagonal Laplacian scaled by eps/h, with
        // neighbor columns that hold fixed Dirichlet data zeroed out.
        tri.add(i, i, 2.0 * eps / h);
        tri.add(i, i - 1, if i - 1 > 0 { -eps / h } else { 0.0 });
        tri.add(i, i + 1, if i + 1 < n - 1 { -eps / h } else { 0.0 });

        // Advective part: the zeroth-order upwind term from each adjacent
        // face lands in the column whose cell the wind sign selected.
        let x = grid.coord(i);
        let a_e = problem.wind().speed(x + 0.5 * h);
        let a_w = problem.wind().speed(x - 0.5 * h);

        if a_e >= 0.0 {
            tri.add(i, i, a_e);
        } else {
            tri.add(i, i + 1, if i + 1 < n - 1 { a_e } else { 0.0 });
        }
        if a_w >= 0.0 {
            tri.add(i, i - 1, if i - 1 > 0 { -a_w } else { 0.0 });
        } else {
            tri.add(i, i, -a_w);
        }

        // Centered correction: each face adds a symmetric +-a/2 pair to the
        // columns on both sides of the face.
        if limiter == FluxLimiter::Centered {
            let (v_east, v_self_e) = if a_e >= 0.0 {
                (0.5 * a_e, -0.5 * a_e)
            } else {
                (-0.5 * a_e, 0.5 * a_e)
            };
            tri.add(i, i + 1, if i + 1 < n - 1 { v_east } else { 0.0 });
            tri.add(i, i, v_self_e);

            let (v_self_w, v_west) = if a_w >= 0.0 {
                (-0.5 * a_w, 0.5 * a_w)
            } else {
                (0.5 * a_w, -0.5 * a_w)
            };
            tri.add(i, i, v_self_w);
            tri.add(i, i - 1, if i - 1 > 0 { v_west } else { 0.0 });
        }
    }

    Ok(tri)
}

/// Sum every worker's contributions into a freshly zeroed dense matrix.
///
/// This is the collective finalize step: all workers' triplet lists must be
/// present, because the global structure is established jointly. The parts
/// are consumed; there is no incremental update of a previous matrix.
pub fn finalize_jacobian(n: usize, parts: impl IntoIterator<Item = JacobianTriplets>) -> Mat<f64> {
    let mut jac = Mat::zeros(n, n);
    for part in parts {
        assert_eq!(part.dim(), n, "dimension mismatch in Jacobian parts");
        for &(row, col, value) in part.entries() {
            jac[(row, col)] += value;
        }
    }
    jac
}
