//! Continuous problem definition.
//!
//! Defines the steady advection-diffusion boundary-value problem being
//! discretized: diffusion coefficient, position-dependent wind speed, and
//! the fixed Dirichlet boundary data.

mod advection_diffusion;

pub use advection_diffusion::{AdvectionDiffusion1D, ConstantWind, ProblemError, WindModel};
