//! fou::validation — shared input guards for the integral evaluators.
//!
//! Purpose
//! -------
//! Centralize precondition checks for the integral evaluators in this
//! crate. This avoids duplicating the Hurst-sum and upper-limit checks
//! across the scalar, elementwise, and Python-facing entry points.
//!
//! Key behaviors
//! -------------
//! - Enforce the hard precondition `H_i + H_j ∈ (0, 2]` before any
//!   special-function or quadrature work is performed.
//! - Enforce that upper integration limits are finite and non-negative,
//!   since the outer integral runs over `[0, h]`.
//! - Map violations into structured [`IntegralError`] values for
//!   consistent handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - A non-finite Hurst exponent makes the sum fail the interval check
//!   and is reported as an invalid Hurst sum; the exponents are not
//!   range-checked individually.
//! - Decay rates `a_i`, `a_j` are deliberately NOT validated: zero or
//!   negative rates are outside the well-posed region and their
//!   numerical consequences propagate to the caller as-is.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no numerical
//!   work and allocates nothing.
//! - Callers treat a successful return as a guarantee that the
//!   degenerate-case dispatch and both general-case branches are safe to
//!   enter (up to the documented numerical-domain caveats).

use crate::fou::errors::{IntegralError, IntegralResult};

/// Validate the inputs of a general-case integral evaluation.
///
/// Parameters
/// ----------
/// - `h`: `f64`
///   Upper integration limit. Must be finite and `≥ 0`.
/// - `h_i`, `h_j`: `f64`
///   Hurst exponents. Their sum must lie in (0, 2].
///
/// Returns
/// -------
/// `IntegralResult<()>`
///   - `Ok(())` if all preconditions hold.
///   - `Err(IntegralError)` identifying the violated constraint.
///
/// Errors
/// ------
/// - `IntegralError::InvalidUpperLimit(h)`
///   Returned when `h` is negative, NaN, or infinite.
/// - `IntegralError::InvalidHurstSum(h_ij)`
///   Returned when `H_i + H_j` does not satisfy `0 < H_i + H_j ≤ 2`
///   (including the NaN case).
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `IntegralError`.
///
/// Notes
/// -----
/// - The Hurst exponents are only constrained through their sum; the
///   kernel `(u − v)^(H_i + H_j − 2)` depends on them solely via
///   `H_i + H_j`.
pub fn validate_input(h: f64, h_i: f64, h_j: f64) -> IntegralResult<()> {
    validate_upper_limit(h)?;

    let h_ij = h_i + h_j;
    if !(h_ij > 0.0 && h_ij <= 2.0) {
        return Err(IntegralError::InvalidHurstSum(h_ij));
    }

    Ok(())
}

/// Validate a single upper integration limit.
///
/// Returns `IntegralError::InvalidUpperLimit` when `h` is negative or
/// non-finite; the integrals are defined over `[0, h]`.
pub fn validate_upper_limit(h: f64) -> IntegralResult<()> {
    if !h.is_finite() || h < 0.0 {
        return Err(IntegralError::InvalidUpperLimit(h));
    }
    Ok(())
}
