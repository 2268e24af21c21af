//! Residual and Jacobian assembly, and the Newton driver.
//!
//! The two evaluators are pure functions of the extended (owned+halo)
//! solution view: every call recomputes its output from scratch, so the
//! outer iteration can mutate the iterate freely between evaluations.
//! [`assemble_residual`] and [`assemble_jacobian`] stay consistent wherever
//! both support the selected limiter, up to the couplings into the
//! boundary-pinned columns, which the matrix drops; the van Leer limiter is
//! residual-only.

mod jacobian;
mod newton;
mod residual;

pub use jacobian::{JacobianError, JacobianTriplets, assemble_jacobian, finalize_jacobian};
pub use newton::{NewtonConfig, NewtonReport, StopReason, solve_stationary};
pub use residual::assemble_residual;
