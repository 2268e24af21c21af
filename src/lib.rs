//! # advdiff-rs
//!
//! A finite-difference discretization kernel for the steady 1D
//! advection-diffusion boundary-value problem
//!
//! -eps u'' + (a(x) u)' = 0   on [-1, 1],   u(-1) = 1, u(1) = 0
//!
//! The crate turns the BVP into a nonlinear algebraic system, a residual
//! vector and its analytic Jacobian, evaluated pointwise on a distributed
//! structured grid:
//! - Structured grid and domain decomposition ([`mesh`])
//! - Flux limiters and face fluxes for the advective term ([`flux`])
//! - Problem definition: diffusion, wind model, boundary data ([`equations`])
//! - Residual and Jacobian assembly plus a Newton driver ([`solver`])
//! - Exact-solution sampling and error norms ([`analysis`])
//!
//! Diffusion is discretized by centered differences; advection by first-order
//! upwinding, optionally corrected toward a high-order flux through a limiter
//! (centered or van Leer). The limiter used in the residual and the limiter
//! used in the Jacobian are independently selectable; the van Leer limiter has
//! no analytic Jacobian and is rejected on the Jacobian side.

pub mod analysis;
pub mod equations;
pub mod flux;
pub mod mesh;
pub mod solver;

// Re-export main types for convenience
pub use analysis::{ErrorNorms, ExactSolution};
pub use equations::{AdvectionDiffusion1D, ConstantWind, ProblemError, WindModel};
pub use flux::{FluxLimiter, LimiterConfig, limited_correction, upwind_flux, upwind_value};
pub use mesh::{
    BoundaryFace, DistributedVector, Grid1D, GridError, LocalSolution, OwnedRange, Partition,
};
pub use solver::{
    JacobianError, JacobianTriplets, NewtonConfig, NewtonReport, StopReason, assemble_jacobian,
    assemble_residual, finalize_jacobian, solve_stationary,
};
