//! Steady 1D advection-diffusion equation.
//!
//! -eps u'' + (a(x) u)' = 0   on [-1, 1],   u(-1) = 1, u(1) = 0
//!
//! eps > 0 is the diffusion coefficient and a(x) the wind speed. The wind is
//! a function of position because its sign at each face midpoint drives the
//! upwind selection; a sign change flips the transport direction mid-domain.

use thiserror::Error;

use crate::mesh::BoundaryFace;

/// Error type for problem configuration.
#[derive(Debug, Error)]
pub enum ProblemError {
    /// The diffusion coefficient must be strictly positive.
    #[error("diffusion coefficient eps = {0} invalid: eps > 0 required")]
    NonpositiveDiffusion(f64),
}

/// Position-dependent wind speed a(x).
///
/// Implemented by [`ConstantWind`] and by any `Fn(f64) -> f64` closure.
pub trait WindModel: Send + Sync {
    /// Wind speed at position `x`.
    fn speed(&self, x: f64) -> f64;
}

impl<F> WindModel for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn speed(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Spatially constant wind.
#[derive(Clone, Copy, Debug)]
pub struct ConstantWind(pub f64);

impl WindModel for ConstantWind {
    fn speed(&self, _x: f64) -> f64 {
        self.0
    }
}

/// The steady advection-diffusion problem on [-1, 1].
#[derive(Clone, Debug)]
pub struct AdvectionDiffusion1D<W: WindModel> {
    eps: f64,
    wind: W,
}

impl<W: WindModel> AdvectionDiffusion1D<W> {
    /// Dirichlet value at the left boundary, u(-1).
    pub const DIRICHLET_LEFT: f64 = 1.0;
    /// Dirichlet value at the right boundary, u(1).
    pub const DIRICHLET_RIGHT: f64 = 0.0;

    /// Create a problem; fails for eps <= 0 (including NaN).
    pub fn new(eps: f64, wind: W) -> Result<Self, ProblemError> {
        if !(eps > 0.0) {
            return Err(ProblemError::NonpositiveDiffusion(eps));
        }
        Ok(Self { eps, wind })
    }

    /// Diffusion coefficient.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Wind model.
    pub fn wind(&self) -> &W {
        &self.wind
    }

    /// Prescribed Dirichlet value at a boundary.
    pub fn boundary_value(&self, face: BoundaryFace) -> f64 {
        match face {
            BoundaryFace::Left => Self::DIRICHLET_LEFT,
            BoundaryFace::Right => Self::DIRICHLET_RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nonpositive_eps() {
        assert!(matches!(
            AdvectionDiffusion1D::new(0.0, ConstantWind(1.0)),
            Err(ProblemError::NonpositiveDiffusion(_))
        ));
        assert!(matches!(
            AdvectionDiffusion1D::new(-0.01, ConstantWind(1.0)),
            Err(ProblemError::NonpositiveDiffusion(_))
        ));
        assert!(AdvectionDiffusion1D::new(0.01, ConstantWind(1.0)).is_ok());
    }

    #[test]
    fn test_rejects_nan_eps() {
        assert!(AdvectionDiffusion1D::new(f64::NAN, ConstantWind(1.0)).is_err());
    }

    #[test]
    fn test_boundary_values() {
        let problem = AdvectionDiffusion1D::new(0.01, ConstantWind(1.0)).unwrap();
        assert_eq!(problem.boundary_value(BoundaryFace::Left), 1.0);
        assert_eq!(problem.boundary_value(BoundaryFace::Right), 0.0);
    }

    #[test]
    fn test_closure_wind() {
        let problem = AdvectionDiffusion1D::new(1.0, |x: f64| x.signum()).unwrap();
        assert_eq!(problem.wind().speed(-0.5), -1.0);
        assert_eq!(problem.wind().speed(0.5), 1.0);
    }
}
