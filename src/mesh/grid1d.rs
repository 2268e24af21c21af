//! Uniform structured 1D grid on [-1, 1].
//!
//! The grid has `n` points x_i = -1 + i*h with spacing h = 2/(n-1).
//! Indices 0 and n-1 are Dirichlet boundary nodes; everything in between is
//! a free unknown.

use thiserror::Error;

/// Error type for grid construction.
#[derive(Debug, Error)]
pub enum GridError {
    /// Fewer than two grid points cannot represent the interval.
    #[error("degenerate grid: {0} points (at least 2 required)")]
    DegenerateGrid(usize),
}

/// Boundary face identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryFace {
    /// Left boundary (x = -1)
    Left,
    /// Right boundary (x = 1)
    Right,
}

/// Uniform grid of `n` points on the interval [-1, 1].
#[derive(Clone, Copy, Debug)]
pub struct Grid1D {
    n: usize,
    h: f64,
}

impl Grid1D {
    /// Left endpoint of the domain.
    pub const X_MIN: f64 = -1.0;
    /// Right endpoint of the domain.
    pub const X_MAX: f64 = 1.0;

    /// Create a grid with `n` points.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::DegenerateGrid(n));
        }
        let h = (Self::X_MAX - Self::X_MIN) / (n - 1) as f64;
        Ok(Self { n, h })
    }

    /// Global number of grid points.
    pub fn n_points(&self) -> usize {
        self.n
    }

    /// Grid spacing h = 2/(n-1).
    pub fn spacing(&self) -> f64 {
        self.h
    }

    /// Coordinate of point `i`: x_i = -1 + i*h.
    pub fn coord(&self, i: usize) -> f64 {
        debug_assert!(i < self.n, "index {} out of range [0, {})", i, self.n);
        Self::X_MIN + i as f64 * self.h
    }

    /// Whether point `i` is a Dirichlet boundary node.
    pub fn is_boundary(&self, i: usize) -> bool {
        i == 0 || i == self.n - 1
    }

    /// Whether `i` is a valid point index.
    pub fn contains(&self, i: usize) -> bool {
        i < self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_coordinates() {
        let grid = Grid1D::new(21).unwrap();

        assert_eq!(grid.n_points(), 21);
        assert!((grid.spacing() - 0.1).abs() < 1e-14);
        assert!((grid.coord(0) - (-1.0)).abs() < 1e-14);
        assert!((grid.coord(10) - 0.0).abs() < 1e-14);
        assert!((grid.coord(20) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_boundary_predicate() {
        let grid = Grid1D::new(5).unwrap();

        assert!(grid.is_boundary(0));
        assert!(grid.is_boundary(4));
        assert!(!grid.is_boundary(1));
        assert!(!grid.is_boundary(3));
    }

    #[test]
    fn test_degenerate_grid() {
        assert!(matches!(Grid1D::new(0), Err(GridError::DegenerateGrid(0))));
        assert!(matches!(Grid1D::new(1), Err(GridError::DegenerateGrid(1))));
        assert!(Grid1D::new(2).is_ok());
    }

    #[test]
    fn test_two_point_grid() {
        // Smallest valid grid: both points are boundary nodes
        let grid = Grid1D::new(2).unwrap();

        assert!((grid.spacing() - 2.0).abs() < 1e-14);
        assert!(grid.is_boundary(0));
        assert!(grid.is_boundary(1));
    }
}
