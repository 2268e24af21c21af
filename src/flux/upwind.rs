//! Upwind face flux for the advective term.
//!
//! At the face between cells i and i+1 the advective flux is
//!
//! flux = a * u_up + a * psi(theta) * (u_dn - u_up)
//!
//! where a is the wind speed at the face midpoint, u_up/u_dn are the upwind
//! and downwind cell values per the sign of a, u_far is the value one cell
//! further upstream than u_up, and theta = (u_up - u_far) / (u_dn - u_up).
//! The correction term is the limited blend toward the centered flux; it is
//! mathematically zero when u_dn == u_up, so that case is skipped rather
//! than dividing by zero.
//!
//! Index substitution at boundaries (replacing out-of-domain or
//! boundary-node values by the Dirichlet constants) is the residual
//! assembler's job; these functions are pure value-level arithmetic.

use super::limiter::FluxLimiter;

/// Pick the upwind cell value from the sign of the wind speed at the face.
///
/// `u_west` is the value in the cell left of the face, `u_east` right of it.
/// A non-negative speed transports information rightward, so the west cell
/// is upwind.
pub fn upwind_value(speed: f64, u_west: f64, u_east: f64) -> f64 {
    if speed >= 0.0 { u_west } else { u_east }
}

/// First-order upwind flux: a * u_up.
pub fn upwind_flux(speed: f64, u_up: f64) -> f64 {
    speed * u_up
}

/// Limited high-order flux correction: a * psi(theta) * (u_dn - u_up).
///
/// Returns exactly 0 when the limiter applies no correction or when the
/// downwind and upwind values coincide (for any theta the correction would
/// vanish, and theta itself would be undefined).
pub fn limited_correction(
    limiter: FluxLimiter,
    speed: f64,
    u_up: f64,
    u_dn: f64,
    u_far: f64,
) -> f64 {
    if !limiter.limits() || u_dn == u_up {
        return 0.0;
    }
    let theta = (u_up - u_far) / (u_dn - u_up);
    speed * limiter.psi(theta) * (u_dn - u_up)
}
