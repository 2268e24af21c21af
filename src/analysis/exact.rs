//! Analytic reference solution.
//!
//! For constant unit wind the steady problem has the closed form
//!
//! u(x) = (1 - exp((x-1)/eps)) / (1 - exp(-2/eps))
//!
//! a boundary layer of width O(eps) at x = 1. Used for error checking only.

use crate::mesh::{Grid1D, OwnedRange};

/// Exact solution sampler for the constant-unit-wind problem.
#[derive(Clone, Copy, Debug)]
pub struct ExactSolution {
    eps: f64,
}

impl ExactSolution {
    /// Reference for the given diffusion coefficient.
    pub fn new(eps: f64) -> Self {
        debug_assert!(eps > 0.0);
        Self { eps }
    }

    /// Exact value at position `x`.
    pub fn value(&self, x: f64) -> f64 {
        (1.0 - ((x - 1.0) / self.eps).exp()) / (1.0 - (-2.0 / self.eps).exp())
    }

    /// Sample at every point of the grid.
    pub fn sample(&self, grid: &Grid1D) -> Vec<f64> {
        self.sample_range(grid, OwnedRange::new(0, grid.n_points()))
    }

    /// Sample at the points of one owned range.
    pub fn sample_range(&self, grid: &Grid1D, range: OwnedRange) -> Vec<f64> {
        range.iter().map(|i| self.value(grid.coord(i))).collect()
    }
}
