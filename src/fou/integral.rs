//! fou::integral — fBM–OU cross-covariance integral evaluators.
//!
//! Purpose
//! -------
//! Evaluate the family of definite integrals
//!
//!   I(h) = ∫₀ʰ ∫₋∞⁰ exp(aᵢu + aⱼv)·(u − v)^(Hᵢ+Hⱼ−2) dv du
//!
//! arising in the correlation structure of Ornstein–Uhlenbeck-type
//! processes driven by fractional Brownian motion, via three
//! interchangeable representations: an elementary formula for the
//! degenerate exponent sum Hᵢ+Hⱼ = 2, a fully closed form in terms of
//! incomplete-gamma and confluent-hypergeometric functions, and a
//! reduced one-dimensional adaptive quadrature. A brute-force nested
//! double quadrature serves as the reference oracle.
//!
//! Key behaviors
//! -------------
//! - Dispatch on the combined exponent H = Hᵢ+Hⱼ: the kernel
//!   `(u−v)^(H−2)` collapses to 1 at H = 2, reducing I(h) to
//!   `(e^{aᵢh} − 1)/(aᵢaⱼ)`.
//! - In the general regime, either evaluate the analytic reduction
//!
//!   [aⱼ^(1−H)·e^{(aᵢ+aⱼ)h}·Γ(H)·Q(H, aⱼh) − h^(H−1)·e^{aᵢh}
//!     − aⱼ^(1−H)·Γ(H) + h^(H−1)·₁F₁(H−1; H; aᵢh)] / ((aᵢ+aⱼ)(H−1))
//!
//!   with Q the regularized upper incomplete gamma function, or
//!   integrate the single-integral reduction
//!
//!   aⱼ^(1−H)·e^{(aᵢ+aⱼ)u}·[Γ(H)·Q(H, aⱼu) − (aⱼu)^(H−1)·e^{−aⱼu}]
//!     / (H−1)
//!
//!   over u ∈ [0, h] by adaptive Gauss–Kronrod quadrature, discarding
//!   the quadrature error estimate.
//! - Support scalar and order-preserving elementwise evaluation over a
//!   vector of upper limits.
//!
//! Invariants & assumptions
//! ------------------------
//! - All three representations agree within 1e-10 relative tolerance
//!   across the valid parameter domain; this is the module's central
//!   correctness contract and is enforced by the cross-method
//!   integration suite.
//! - `H_i + H_j ∈ (0, 2]` is a hard precondition of the general-case
//!   entry points, enforced by [`validate_input`] before any numerical
//!   work.
//! - Decay rates are conventionally strictly positive. Zero or negative
//!   rates, and the removable singularity of the closed form at
//!   Hᵢ+Hⱼ = 1, are outside the well-posed region: results there
//!   propagate as non-finite floats and are not signalled as errors.
//!
//! Conventions
//! -----------
//! - Error handling uses [`IntegralError`] from `fou::errors` and the
//!   result alias [`IntegralResult`]; numerical-domain failures are
//!   never caught.
//! - The evaluation method is selected by [`Method`], parseable from
//!   the selector strings `"closed_form"` and `"single_integral"`.
//!
//! Downstream usage
//! ----------------
//! - Callers estimating or simulating fractional-process covariance
//!   structures evaluate [`integral`] (or the elementwise variants) at
//!   the lags of interest; [`integral_quad`] exists to validate the
//!   analytic paths against an independent numerical method and is too
//!   expensive for production-scale use.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover degenerate-case dispatch and exactness, the
//!   concrete scenario I(1) = e − 1 at aᵢ=aⱼ=Hᵢ=Hⱼ=1, monotonicity in
//!   h, elementwise consistency, selector parsing, and boundary
//!   rejection.
//! - The nested-oracle grid comparison lives in the cross-method
//!   integration suite under `tests/`.

use std::str::FromStr;

use ndarray::Array1;
use statrs::function::gamma::{gamma, gamma_ur};

use crate::fou::errors::{IntegralError, IntegralResult};
use crate::fou::validation::validate_input;
use crate::numerics::hypergeometric::hyp1f1;
use crate::numerics::quadrature::{self, QuadOptions};

/// Method — evaluation path for the general-case integral.
///
/// Purpose
/// -------
/// Select between the two algebraically equivalent general-case
/// representations. The choice does not change the result beyond
/// numerical error; it exists so the paths can be cross-validated
/// against each other and against the double-integral oracle.
///
/// Variants
/// --------
/// - `ClosedForm`
///   Fully analytic expression built from Γ, the regularized upper
///   incomplete gamma Q, and ₁F₁. No quadrature.
/// - `SingleIntegral`
///   One-dimensional adaptive quadrature of the analytically reduced
///   integrand over `[0, h]`.
///
/// Notes
/// -----
/// - Parseable via [`FromStr`] from `"closed_form"` and
///   `"single_integral"`; any other selector is an
///   [`IntegralError::InvalidMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ClosedForm,
    SingleIntegral,
}

impl Default for Method {
    fn default() -> Self {
        Method::ClosedForm
    }
}

impl FromStr for Method {
    type Err = IntegralError;

    fn from_str(name: &str) -> IntegralResult<Self> {
        match name {
            "closed_form" => Ok(Method::ClosedForm),
            "single_integral" => Ok(Method::SingleIntegral),
            other => Err(IntegralError::InvalidMethod(other.to_string())),
        }
    }
}

/// Evaluate I(h) for the degenerate exponent sum Hᵢ + Hⱼ = 2.
///
/// Parameters
/// ----------
/// - `h`: `f64`
///   Upper integration limit.
/// - `a_i`, `a_j`: `f64`
///   Exponential decay rates.
///
/// Returns
/// -------
/// `f64`
///   The exact value `(e^{aᵢh} − 1)/(aᵢ·aⱼ)`.
///
/// Notes
/// -----
/// - At Hᵢ+Hⱼ = 2 the kernel `(u−v)^(Hᵢ+Hⱼ−2)` degenerates to 1 and
///   the double integral separates into elementary exponential factors.
/// - No error conditions: `a_i = 0` or `a_j = 0` produces a division
///   singularity that propagates as ±∞/NaN, per the crate's
///   numerical-domain contract.
pub fn integral_h2(h: f64, a_i: f64, a_j: f64) -> f64 {
    ((a_i * h).exp() - 1.0) / (a_i * a_j)
}

/// Elementwise variant of [`integral_h2`] over a vector of upper limits.
///
/// Returns an array of equal length with `out[k] = I(h[k])`, preserving
/// order.
pub fn integral_h2_elementwise(h: &Array1<f64>, a_i: f64, a_j: f64) -> Array1<f64> {
    h.mapv(|h_k| integral_h2(h_k, a_i, a_j))
}

/// Evaluate I(h) in the general regime, dispatching on Hᵢ + Hⱼ.
///
/// Parameters
/// ----------
/// - `h`: `f64`
///   Upper integration limit; must be finite and `≥ 0`.
/// - `a_i`, `a_j`: `f64`
///   Exponential decay rates (conventionally strictly positive; not
///   validated).
/// - `h_i`, `h_j`: `f64`
///   Hurst exponents with `H_i + H_j ∈ (0, 2]`.
/// - `method`: [`Method`]
///   General-case evaluation path; ignored when `H_i + H_j == 2`, where
///   the degenerate formula is exact and quadrature-free.
///
/// Returns
/// -------
/// `IntegralResult<f64>`
///   - `Ok(value)` on success.
///   - `Err(IntegralError)` when validation rejects the inputs.
///
/// Errors
/// ------
/// - `IntegralError::InvalidUpperLimit(h)`
///   When `h` is negative or non-finite.
/// - `IntegralError::InvalidHurstSum(h_ij)`
///   When `H_i + H_j` lies outside (0, 2].
///
/// Panics
/// ------
/// - Never panics on validated inputs. Numerical-domain violations
///   (zero rates, Hᵢ+Hⱼ = 1) yield non-finite values instead.
///
/// Examples
/// --------
/// ```rust
/// use fou_integrals::fou::integral::{integral, Method};
///
/// // Degenerate sum: I(1) = (e − 1)/(1·1).
/// let value = integral(1.0, 1.0, 1.0, 1.0, 1.0, Method::ClosedForm).unwrap();
/// assert!((value - (std::f64::consts::E - 1.0)).abs() < 1e-14);
/// ```
pub fn integral(
    h: f64, a_i: f64, a_j: f64, h_i: f64, h_j: f64, method: Method,
) -> IntegralResult<f64> {
    validate_input(h, h_i, h_j)?;

    let h_ij = h_i + h_j;
    if h_ij == 2.0 {
        return Ok(integral_h2(h, a_i, a_j));
    }
    if h == 0.0 {
        // Empty outer range; also keeps Q(H, aⱼh) off the x = 0 domain edge.
        return Ok(0.0);
    }

    match method {
        Method::ClosedForm => Ok(closed_form(h, a_i, a_j, h_ij)),
        Method::SingleIntegral => Ok(single_integral(h, a_i, a_j, h_ij)),
    }
}

/// Elementwise variant of [`integral`] over a vector of upper limits.
///
/// Each element is validated and evaluated independently; the first
/// invalid element aborts the call with its error. Order is preserved.
pub fn integral_elementwise(
    h: &Array1<f64>, a_i: f64, a_j: f64, h_i: f64, h_j: f64, method: Method,
) -> IntegralResult<Array1<f64>> {
    let mut out = Array1::<f64>::zeros(h.len());
    for (k, &h_k) in h.iter().enumerate() {
        out[k] = integral(h_k, a_i, a_j, h_i, h_j, method)?;
    }
    Ok(out)
}

/// Evaluate I(h) by brute-force nested adaptive quadrature.
///
/// Parameters
/// ----------
/// - `h`: `f64`
///   Upper limit of the outer integral over `u ∈ [0, h]`.
/// - `a_i`, `a_j`: `f64`
///   Exponential decay rates; `a_j > 0` is required for the inner tail
///   integral to converge.
/// - `h_i`, `h_j`: `f64`
///   Hurst exponents entering the kernel `(u − v)^(Hᵢ+Hⱼ−2)`.
///
/// Returns
/// -------
/// `f64`
///   The double-integral estimate, with the inner integral over
///   `v ∈ (−∞, 0]` evaluated afresh at every outer quadrature node.
///
/// Notes
/// -----
/// - Reference oracle only: no closed-form shortcuts, no input
///   validation, and a cost profile (nested adaptive refinement) that
///   is acceptable for testing but not for production-scale use.
pub fn integral_quad(h: f64, a_i: f64, a_j: f64, h_i: f64, h_j: f64) -> f64 {
    let h_ij = h_i + h_j;
    let opts = QuadOptions::default();

    let outer = |u: f64| {
        let inner = |v: f64| (a_i * u + a_j * v).exp() * (u - v).powf(h_ij - 2.0);
        quadrature::integrate_left_tail(&inner, 0.0, &opts).value
    };

    quadrature::integrate(&outer, 0.0, h, &opts).value
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Fully analytic general-case expression.
///
/// Combines Γ(H), Q(H, aⱼh), and ₁F₁(H−1; H; aᵢh) as documented in the
/// module header. The `(H − 1)` denominator carries the removable
/// singularity at H = 1; callers keep that point out of the domain.
#[inline]
fn closed_form(h: f64, a_i: f64, a_j: f64, h_ij: f64) -> f64 {
    let g = gamma(h_ij);
    let res = a_j.powf(1.0 - h_ij) * ((a_i + a_j) * h).exp() * gamma_ur(h_ij, a_j * h) * g
        - h.powf(h_ij - 1.0) * (a_i * h).exp()
        - a_j.powf(1.0 - h_ij) * g
        + h.powf(h_ij - 1.0) * hyp1f1(h_ij - 1.0, h_ij, a_i * h);
    res / ((a_i + a_j) * (h_ij - 1.0))
}

/// Reduced single-integral representation.
///
/// The inner v-integration is eliminated through the incomplete-gamma
/// recurrence Γ(s, x) = [Γ(s+1, x) − xˢe^{−x}]/s with s = H − 1,
/// leaving a one-dimensional integrand over u ∈ [0, h]. Quadrature
/// nodes are strictly interior, so the integrable `u^(H−1)` endpoint
/// behavior at H < 1 is refined, never evaluated at u = 0.
#[inline]
fn single_integral(h: f64, a_i: f64, a_j: f64, h_ij: f64) -> f64 {
    let g = gamma(h_ij);
    let scale = a_j.powf(1.0 - h_ij) / (h_ij - 1.0);

    let integrand = |u: f64| {
        let x = a_j * u;
        scale
            * ((a_i + a_j) * u).exp()
            * (gamma_ur(h_ij, x) * g - x.powf(h_ij - 1.0) * (-x).exp())
    };

    quadrature::integrate(&integrand, 0.0, h, &QuadOptions::default()).value
}
