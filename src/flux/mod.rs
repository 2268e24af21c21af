//! Advective flux schemes.
//!
//! The advective term is discretized by first-order upwinding at cell faces,
//! optionally corrected toward a high-order flux through a flux limiter:
//! - [`FluxLimiter`]: closed family of limiter functions (none, centered,
//!   van Leer)
//! - [`upwind_flux`] / [`limited_correction`]: value-level face flux pieces
//!   shared by the residual assembler

mod limiter;
mod upwind;

pub use limiter::{FluxLimiter, LimiterConfig, ParseLimiterError};
pub use upwind::{limited_correction, upwind_flux, upwind_value};
